use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use url::Url;

/// What the mock server does with the n-th request (zero-based).
#[derive(Debug, Clone)]
pub(crate) enum MockReply {
    Respond {
        status: u16,
        body: String,
        delay: Duration,
    },
    /// Close the connection without answering.
    Drop,
}

impl MockReply {
    pub(crate) fn ok(body: &str) -> Self {
        Self::Respond {
            status: 200,
            body: body.to_owned(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::Respond {
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn delayed(self, delay: Duration) -> Self {
        match self {
            Self::Respond { status, body, .. } => Self::Respond {
                status,
                body,
                delay,
            },
            Self::Drop => Self::Drop,
        }
    }
}

type Responder = Arc<dyn Fn(usize) -> MockReply + Send + Sync>;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub head: String,
    pub body: String,
}

pub(crate) struct MockServer {
    pub url: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// A JSON-RPC success body padded to exactly `len` bytes.
pub(crate) fn padded_result_body(len: usize) -> String {
    let prefix = r#"{"jsonrpc":"2.0","id":1,"result":""#;
    let suffix = r#""}"#;
    let padding = len
        .saturating_sub(prefix.len())
        .saturating_sub(suffix.len());
    format!("{}{}{}", prefix, "x".repeat(padding), suffix)
}

pub(crate) fn spawn_mock_server<F>(responder: F) -> Result<MockServer, String>
where
    F: Fn(usize) -> MockReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let url = Url::parse(&format!("http://{}", addr))
        .map_err(|err| format!("server url failed: {}", err))?;
    let responder: Responder = Arc::new(responder);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let counter = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let recorded = Arc::clone(&requests);
    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let index = counter.fetch_add(1, Ordering::SeqCst);
                    let reply = responder(index);
                    let recorded = Arc::clone(&recorded);
                    thread::spawn(move || handle_client(stream, &reply, &recorded));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(MockServer {
        url,
        requests,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(
    mut stream: TcpStream,
    reply: &MockReply,
    recorded: &Arc<Mutex<Vec<RecordedRequest>>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    if let Ok(mut requests) = recorded.lock() {
        requests.push(request);
    }

    let (status, body, delay) = match reply {
        MockReply::Respond {
            status,
            body,
            delay,
        } => (*status, body.as_str(), *delay),
        MockReply::Drop => {
            drop(stream.shutdown(Shutdown::Both));
            return;
        }
    };

    if !delay.is_zero() {
        thread::sleep(delay);
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

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data: Vec<u8> = Vec::new();
    let mut buffer = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(buffer.get(..read)?);
        if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos.saturating_add(4);
        }
    };

    let head = String::from_utf8_lossy(data.get(..header_end)?).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < header_end.saturating_add(content_length) {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(buffer.get(..read)?);
    }

    let body = String::from_utf8_lossy(data.get(header_end..)?).into_owned();
    Some(RecordedRequest { head, body })
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}
