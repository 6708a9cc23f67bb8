/// Convenience macro for auto-registering a setup hook
///
/// Usage:
/// ```rust,ignore
/// register_hook!(DatabaseFixture, "database_fixture");
/// ```
///
/// The type must implement `BeforeTestExecution`. The registering crate
/// needs its own `inventory` dependency.
#[macro_export]
macro_rules! register_hook {
    ($participant:ty, $name:literal) => {
        inventory::submit! {
            $crate::core::participant::ParticipantDescriptor {
                name: $name,
                hook: $crate::core::participant::HookBinding::Setup(
                    <$participant as $crate::core::participant::BeforeTestExecution>::before_test_execution,
                ),
            }
        }
    };
}

/// Auto-register a fallible setup hook
///
/// Usage:
/// ```rust,ignore
/// register_try_hook!(SchemaMigration, "schema_migration");
/// ```
#[macro_export]
macro_rules! register_try_hook {
    ($participant:ty, $name:literal) => {
        inventory::submit! {
            $crate::core::participant::ParticipantDescriptor {
                name: $name,
                hook: $crate::core::participant::HookBinding::TrySetup(
                    <$participant as $crate::core::participant::TryBeforeTestExecution>::try_before_test_execution,
                ),
            }
        }
    };
}

/// Auto-register a participant that carries no setup hook. It is listed by
/// the registry and skipped by the setup pass without an invocation attempt.
#[macro_export]
macro_rules! register_participant {
    ($name:literal) => {
        inventory::submit! {
            $crate::core::participant::ParticipantDescriptor {
                name: $name,
                hook: $crate::core::participant::HookBinding::Absent,
            }
        }
    };
}
