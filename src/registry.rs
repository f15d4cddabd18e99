//! The local name registry: a process-wide `name -> Pid` map.
//!
//! Grounded on the teacher's `broker::registry::ActorRegistry` for the
//! concurrency choice (`dashmap::DashMap`, atomic `entry`-guarded insertion)
//! but deliberately not its generic message-type parameter or pool-routing
//! strategies (round-robin/random dispatch across a named group) — this
//! crate has no broker and addresses exactly one `Pid` per name.

use std::sync::OnceLock;

use dashmap::DashMap;

use crate::pid::Pid;

/// A process-wide `name -> Pid` map with no liveness tracking: once a name is
/// registered it stays registered until explicitly removed, even if the
/// process behind it has exited.
pub struct Registry {
    names: DashMap<String, Pid>,
}

impl Registry {
    fn new() -> Self {
        Registry {
            names: DashMap::new(),
        }
    }

    /// Register `pid` under `name`. Returns `false` without replacing the
    /// existing entry if `name` is already taken.
    pub fn register(&self, name: impl Into<String>, pid: Pid) -> bool {
        use dashmap::mapref::entry::Entry;
        match self.names.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(pid);
                true
            }
        }
    }

    /// Remove `name`. Returns `true` if it was present.
    pub fn unregister(&self, name: &str) -> bool {
        self.names.remove(name).is_some()
    }

    /// Look up the `Pid` currently registered under `name`.
    pub fn whereis(&self, name: &str) -> Option<Pid> {
        self.names.get(name).map(|entry| entry.value().clone())
    }

    /// Snapshot of every name currently registered, in no particular order.
    pub fn registered(&self) -> Vec<String> {
        self.names.iter().map(|entry| entry.key().clone()).collect()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry singleton.
pub fn global() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Register `pid` under `name` in the global registry. See [`Registry::register`].
pub fn register(name: impl Into<String>, pid: Pid) -> bool {
    global().register(name, pid)
}

/// Remove `name` from the global registry. See [`Registry::unregister`].
pub fn unregister(name: &str) -> bool {
    global().unregister(name)
}

/// Look up `name` in the global registry. See [`Registry::whereis`].
pub fn whereis(name: &str) -> Option<Pid> {
    global().whereis(name)
}

/// Snapshot every registered name. See [`Registry::registered`].
pub fn registered() -> Vec<String> {
    global().registered()
}
