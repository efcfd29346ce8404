use backtrace::Backtrace;
use log::error;
use std::panic::{self, PanicHookInfo as PanicInfo};
use std::sync::atomic::{AtomicBool, Ordering};

static PANIC_HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);
static SIGNAL_HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);
static LOG_BACKTRACE: AtomicBool = AtomicBool::new(false);

/// Logs every panic with a backtrace. Unwinding continues afterwards, so a
/// panicking macro handler is still contained by the dispatcher.
pub fn install_panic_handler() {
    if PANIC_HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    panic::set_hook(Box::new(|panic_info| {
        handle_panic(panic_info);
    }));

    log::info!("Panic handler installed");
}

fn handle_panic(panic_info: &PanicInfo) {
    let thread = std::thread::current();
    let thread_name = thread.name().unwrap_or("<unnamed>");

    let payload = panic_info.payload();
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic payload".to_string()
    };

    let location = panic_info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "Unknown location".to_string());

    error!("PANIC in thread '{}': {} at {}", thread_name, message, location);

    if LOG_BACKTRACE.load(Ordering::Relaxed) {
        error!("Backtrace:\n{:?}", Backtrace::new());
    }
}

pub fn setup_full_backtrace_for_dev(debug: bool) {
    LOG_BACKTRACE.store(debug, Ordering::Relaxed);

    if debug {
        std::env::set_var("RUST_BACKTRACE", "full");
    } else {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    install_signal_handler();
}

// Only async-signal-safe calls are allowed past this point: a fixed message
// through write(2), then _exit(2).
#[cfg(unix)]
extern "C" fn on_fatal_signal(sig: libc::c_int) {
    let message = fatal_message(sig);
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            message.as_ptr() as *const libc::c_void,
            message.len(),
        );
        libc::_exit(134);
    }
}

#[cfg(unix)]
fn fatal_message(sig: libc::c_int) -> &'static [u8] {
    match sig {
        libc::SIGSEGV => b"\nmacrod: SIGSEGV, the input device may still be disabled for X\n",
        libc::SIGABRT => b"\nmacrod: SIGABRT, the input device may still be disabled for X\n",
        _ => b"\nmacrod: fatal signal, the input device may still be disabled for X\n",
    }
}

#[cfg(unix)]
fn install_signal_handler() {
    if SIGNAL_HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    for sig in [libc::SIGABRT, libc::SIGSEGV] {
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = on_fatal_signal as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);

            if libc::sigaction(sig, &action, std::ptr::null_mut()) != 0 {
                log::warn!("Could not install handler for signal {}", sig);
            }
        }
    }

    log::info!("Signal handler installed for SIGABRT and SIGSEGV");
}

#[cfg(not(unix))]
fn install_signal_handler() {
    log::info!("Signal handler not available on non-Unix platforms");
}
