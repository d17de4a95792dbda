//! Build-time bootstrap for developer secrets files.
//!
//! A fresh checkout has `src/secrets.template.h` checked in but no
//! `src/secrets.h`; compiling the firmware would fail on the missing
//! include. [`ensure_secrets_present`] closes that gap: registered as a
//! pre-action against the object target that compiles the guarded source,
//! it copies the template into place when the real file is missing and
//! warns on stderr, and does nothing at all when the file already exists.
//!
//! The hook never touches an existing secrets file and never invents
//! content: a missing template is a hard error that aborts the build.
//!
//! ```no_run
//! use secrets_bootstrap::{BuildContext, PreActionRegistry};
//!
//! let mut registry = PreActionRegistry::new();
//! registry.add_pre_action("build/src/main.o", |ctx| {
//!     secrets_bootstrap::ensure_secrets_present_in(ctx.root(), &mut std::io::stderr())
//!         .map_err(Into::into)
//! });
//!
//! let ctx = BuildContext::new("build/src/main.o", ".");
//! registry.run_pre_actions(&ctx)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod bootstrap;
mod registry;

pub use bootstrap::{
    ensure_secrets_present, ensure_secrets_present_in, SECRETS_PATH, TEMPLATE_PATH,
};
pub use registry::{BuildContext, PreActionRegistry};
