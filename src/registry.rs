use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

/// What the build system hands a pre-action: the identifier of the target
/// about to be built and the project root relative paths resolve against.
#[derive(Clone, Debug)]
pub struct BuildContext {
    target: String,
    root: PathBuf,
}

impl BuildContext {
    pub fn new(target: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            root: root.into(),
        }
    }

    /// Identifier of the guarded build target, e.g. `build/src/main.o`.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

type PreAction = Box<dyn Fn(&BuildContext) -> Result<()>>;

/// Pre-actions keyed by build target, run immediately before that target
/// is built. This is the generic extension point the secrets hook plugs
/// into; it knows nothing about any particular hook.
#[derive(Default)]
pub struct PreActionRegistry {
    actions: HashMap<String, Vec<PreAction>>,
}

impl PreActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` to run before `target` is built. Actions for the
    /// same target run in registration order.
    pub fn add_pre_action(
        &mut self,
        target: impl Into<String>,
        action: impl Fn(&BuildContext) -> Result<()> + 'static,
    ) {
        self.actions
            .entry(target.into())
            .or_default()
            .push(Box::new(action));
    }

    /// Run every pre-action registered for the context's target. Targets
    /// with no registered actions are a no-op.
    ///
    /// # Errors
    ///
    /// Returns the first failing action's error; later actions for the
    /// same target do not run, and the caller is expected to abort the
    /// build of that target.
    pub fn run_pre_actions(&self, ctx: &BuildContext) -> Result<()> {
        let Some(actions) = self.actions.get(ctx.target()) else {
            return Ok(());
        };
        debug!(
            "running {} pre-action(s) for '{}'",
            actions.len(),
            ctx.target()
        );
        for action in actions {
            action(ctx)?;
        }
        Ok(())
    }
}
