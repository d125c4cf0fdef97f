//! Terminal contactable
//!
//! Speaks by writing `[id] text` lines and listens to lines read from a
//! reader. [`TerminalContactable::stdio`] wires it to the process's own
//! stdin and stdout.

use async_trait::async_trait;
use foreach_application::{Contactable, ContactableError, Inbox};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct TerminalContactable<R, W> {
    id: String,
    reader: std::sync::Mutex<Option<R>>,
    writer: Mutex<W>,
}

impl TerminalContactable<BufReader<Stdin>, Stdout> {
    pub fn stdio(id: impl Into<String>) -> Self {
        Self::new(id, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalContactable<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(id: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            id: id.into(),
            reader: std::sync::Mutex::new(Some(reader)),
            writer: Mutex::new(writer),
        }
    }
}

#[async_trait]
impl<R, W> Contactable for TerminalContactable<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn speak(&self, text: &str) -> Result<(), ContactableError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(format!("[{}] {}\n", self.id, text).as_bytes())
            .await?;
        writer.flush().await?;
        Ok(())
    }

    /// Must be called within a tokio runtime; lines are read from a task
    fn listen(&self) -> Result<Inbox, ContactableError> {
        let reader = self
            .reader
            .lock()
            .ok()
            .and_then(|mut reader| reader.take())
            .ok_or_else(|| ContactableError::AlreadyListening(self.id.clone()))?;

        let (sender, inbox) = Inbox::channel();
        let id = self.id.clone();

        tokio::spawn(async move {
            let mut lines = reader.lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if sender.send(line).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!("Input for {} reached end of file", id);
                        break;
                    }
                    Err(e) => {
                        warn!("Failed to read input for {}: {}", id, e);
                        break;
                    }
                }
            }
        });

        Ok(inbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_speak_prefixes_id() {
        let (writer, mut output) = tokio::io::duplex(1024);
        let contactable = TerminalContactable::new("me", BufReader::new(&b""[..]), writer);

        contactable.speak("(0 remaining) great idea").await.unwrap();
        drop(contactable);

        let mut written = String::new();
        output.read_to_string(&mut written).await.unwrap();
        assert_eq!(written, "[me] (0 remaining) great idea\n");
    }

    #[tokio::test]
    async fn test_listen_yields_lines_verbatim() {
        let input = std::io::Cursor::new(b"a\r\n  spaced  \nd\n".to_vec());
        let contactable = TerminalContactable::new("me", BufReader::new(input), tokio::io::sink());

        let mut inbox = contactable.listen().unwrap();

        assert_eq!(inbox.recv().await.as_deref(), Some("a"));
        assert_eq!(inbox.recv().await.as_deref(), Some("  spaced  "));
        assert_eq!(inbox.recv().await.as_deref(), Some("d"));
        assert_eq!(inbox.recv().await, None);
        assert!(contactable.listen().is_err());
    }
}
