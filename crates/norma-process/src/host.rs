use std::sync::OnceLock;

/// Name of this machine, looked up once per process.
///
/// Falls back to an empty string when the lookup fails.
pub fn hostname() -> &'static str {
    static HOSTNAME: OnceLock<String> = OnceLock::new();
    HOSTNAME.get_or_init(|| {
        let name = lookup_hostname().unwrap_or_default();
        tracing::debug!(hostname = %name, "resolved hostname");
        name
    })
}

/// `(hostname, pid)` of the running process, e.g. for tagging log file names.
pub fn hostname_and_pid() -> (&'static str, u32) {
    (hostname(), std::process::id())
}

#[cfg(unix)]
fn lookup_hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes; the last byte is never
    // written so the result stays NUL-terminated even if truncated.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len() - 1) };
    if rc != 0 {
        tracing::warn!(error = %std::io::Error::last_os_error(), "gethostname failed");
        return None;
    }
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..len]).into_owned())
}

#[cfg(windows)]
fn lookup_hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok()
}

#[cfg(not(any(unix, windows)))]
fn lookup_hostname() -> Option<String> {
    None
}
