use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The developer-specific secrets header, relative to the project root.
/// Owned by the developer once it exists; never overwritten.
pub const SECRETS_PATH: &str = "src/secrets.h";

/// The checked-in placeholder content used to bootstrap [`SECRETS_PATH`].
pub const TEMPLATE_PATH: &str = "src/secrets.template.h";

/// Ensure the secrets header exists in the current working directory,
/// copying the template and warning on stderr when it does not.
///
/// # Errors
///
/// Propagates the underlying I/O error when the template is missing or the
/// destination cannot be written.
pub fn ensure_secrets_present() -> io::Result<()> {
    ensure_secrets_present_in(Path::new("."), &mut io::stderr())
}

/// [`ensure_secrets_present`] against an explicit project root, with
/// diagnostics going to `diag` instead of stderr.
///
/// If `root/src/secrets.h` already exists this returns immediately with no
/// side effects and no output. Otherwise it writes one warning line to
/// `diag` and copies `root/src/secrets.template.h` byte-for-byte to the
/// secrets path.
///
/// # Errors
///
/// Propagates the underlying I/O error when the template is missing or the
/// destination cannot be written. Nothing is caught or translated here; a
/// build without a secrets file is not worth continuing.
pub fn ensure_secrets_present_in(root: &Path, diag: &mut dyn Write) -> io::Result<()> {
    let secrets = root.join(SECRETS_PATH);
    if secrets.exists() {
        return Ok(());
    }
    // warning goes out before the copy; a failed copy still reports what
    // was being attempted
    writeln!(diag, "Warning: Created secrets.h from template!")?;
    fs::copy(root.join(TEMPLATE_PATH), &secrets)?;
    Ok(())
}
