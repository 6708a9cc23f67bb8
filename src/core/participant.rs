use anyhow::Result;

/// Contract for types that want setup to run once before any test executes.
///
/// The hook is an associated function: it belongs to the type, never to an
/// instance. Failure is signalled by panicking; the panic is caught at this
/// hook's boundary and recorded without disturbing other hooks.
pub trait BeforeTestExecution {
    fn before_test_execution();
}

/// Fallible variant of [`BeforeTestExecution`] for setup that can fail
/// without unwinding. An `Err` is recorded the same way a panic is.
pub trait TryBeforeTestExecution {
    fn try_before_test_execution() -> Result<()>;
}

/// How a participant's hook was resolved at registration time
#[derive(Debug, Clone, Copy)]
pub enum HookBinding {
    /// Registered without a hook; enumerated but never invoked
    Absent,
    /// Zero-argument hook that signals failure by panicking
    Setup(fn()),
    /// Hook that signals failure through its returned error
    TrySetup(fn() -> Result<()>),
}

impl HookBinding {
    /// Whether the setup pass has anything to invoke for this participant
    pub fn is_bound(&self) -> bool {
        !matches!(self, HookBinding::Absent)
    }
}

/// Participant descriptor for auto-registration
#[derive(Debug, Clone, Copy)]
pub struct ParticipantDescriptor {
    pub name: &'static str,
    pub hook: HookBinding,
}

// Inventory collection for auto-registering participants
inventory::collect!(ParticipantDescriptor);

/// Registry of every participant known to the process.
///
/// The setup pass only reads the registry; nothing mutates it while a pass
/// is underway. Order of participants carries no meaning.
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<ParticipantDescriptor>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// Registers a participant explicitly, bypassing inventory
    pub fn register(&mut self, descriptor: ParticipantDescriptor) {
        self.participants.push(descriptor);
    }

    /// Snapshots every participant submitted through the registration macros
    pub fn discover() -> Self {
        let mut registry = Self::new();

        for descriptor in inventory::iter::<ParticipantDescriptor> {
            registry.participants.push(*descriptor);
        }

        registry
    }

    /// Returns all registered participants
    pub fn participants(&self) -> &[ParticipantDescriptor] {
        &self.participants
    }

    /// Finds a participant by name
    pub fn find_participant(&self, name: &str) -> Option<&ParticipantDescriptor> {
        self.participants
            .iter()
            .find(|descriptor| descriptor.name == name)
    }

    /// Number of participants whose hook will actually be invoked
    pub fn hooked_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|descriptor| descriptor.hook.is_bound())
            .count()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
