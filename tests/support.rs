use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    requests: Arc<AtomicUsize>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// A JSON-RPC success body of exactly `len` bytes.
#[must_use]
pub fn result_body(len: usize) -> String {
    let prefix = r#"{"jsonrpc":"2.0","id":1,"result":""#;
    let suffix = r#""}"#;
    let padding = len
        .saturating_sub(prefix.len())
        .saturating_sub(suffix.len());
    format!("{}{}{}", prefix, "x".repeat(padding), suffix)
}

/// Spawn a JSON-RPC server answering every request with `status` and `body`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_rpc_server(status: u16, body: String) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let body = body.clone();
                    thread::spawn(move || handle_client(stream, status, &body));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            requests,
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, status: u16, body: &str) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    if !drain_request(&mut stream) {
        return;
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        if status == 200 { "OK" } else { "Status" },
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn drain_request(stream: &mut TcpStream) -> bool {
    let mut data: Vec<u8> = Vec::new();
    let mut buffer = [0u8; 4096];
    let header_end = loop {
        let Ok(read) = stream.read(&mut buffer) else {
            return false;
        };
        if read == 0 {
            return false;
        }
        let Some(chunk) = buffer.get(..read) else {
            return false;
        };
        data.extend_from_slice(chunk);
        if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos.saturating_add(4);
        }
    };

    let content_length = data
        .get(..header_end)
        .map(String::from_utf8_lossy)
        .and_then(|head| {
            head.lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        })
        .unwrap_or(0);

    while data.len() < header_end.saturating_add(content_length) {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => return false,
            Ok(read) => match buffer.get(..read) {
                Some(chunk) => data.extend_from_slice(chunk),
                None => return false,
            },
        }
    }
    true
}

/// Write a config file pointing every listed rpc at its url.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_config(path: &Path, rpcs: &[(&str, &str, usize, usize)]) -> Result<(), String> {
    let entries: Vec<serde_json::Value> = rpcs
        .iter()
        .map(|(id, endpoint, rate_limit, sample_size)| {
            serde_json::json!({
                "id": id,
                "endpoint": endpoint,
                "rateLimit": rate_limit,
                "sampleSize": sample_size,
            })
        })
        .collect();
    let config = serde_json::json!({ "rpcs": entries });
    std::fs::write(path, config.to_string()).map_err(|err| format!("write config failed: {}", err))
}

/// Run the `rpcpulse` binary with alerts logged only and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_rpcpulse<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = rpcpulse_bin()?;
    Command::new(bin)
        .args(args)
        .env("RPCPULSE_LOG", "info")
        .env_remove("RUST_LOG")
        .env_remove("TGBOT_API_KEY")
        .env_remove("NOTIFIER_SUBS")
        .env_remove("RPCPULSE_CONFIG")
        .env_remove("RPCPULSE_INTERVAL")
        .env_remove("RPCPULSE_AVERAGE_OVER")
        .env_remove("RPCPULSE_RECORDS")
        .output()
        .map_err(|err| format!("run rpcpulse failed: {}", err))
}

fn rpcpulse_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_rpcpulse").map_or_else(
        || Err("CARGO_BIN_EXE_rpcpulse missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
