use std::io::{self, IsTerminal, Read};

/// How long to wait for a writer on the other end of a pipe
const PENDING_WAIT_MS: i32 = 100;

/// Tokens piped into standard input; empty when stdin is a terminal or an
/// open pipe with nothing written to it
pub fn read_piped_tokens() -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let pending = has_pending_input(&stdin);
    read_tokens_if_pending(stdin.lock(), pending)
}

/// Read `reader` to the end only when input is known to be waiting
pub fn read_tokens_if_pending<R: Read>(mut reader: R, pending: bool) -> io::Result<Vec<String>> {
    if !pending {
        return Ok(Vec::new());
    }

    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(split_tokens(&buffer))
}

pub fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(unix)]
fn has_pending_input(stdin: &io::Stdin) -> bool {
    use std::os::unix::io::AsRawFd;
    fd_has_pending_input(stdin.as_raw_fd(), PENDING_WAIT_MS)
}

#[cfg(not(unix))]
fn has_pending_input(_stdin: &io::Stdin) -> bool {
    true
}

/// Data or end-of-file is available on `fd` within `wait_ms`
#[cfg(unix)]
fn fd_has_pending_input(fd: std::os::unix::io::RawFd, wait_ms: i32) -> bool {
    let mut poll_fd = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    // SAFETY: a single valid pollfd that outlives the call
    let ready = unsafe { libc::poll(&mut poll_fd, 1, wait_ms) };
    ready > 0 && poll_fd.revents & (libc::POLLIN | libc::POLLHUP) != 0
}
