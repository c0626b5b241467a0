use std::{
    io::{BufRead, ErrorKind},
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};

use log::{debug, error, warn};

use crate::voice::RecognitionEvent;

/// Continuously "recognise" speech from a line-oriented reader (e.g. stdin, or a
/// transcript piped in from an external recogniser). Each non-empty line is one
/// utterance; an empty line counts as speech that could not be recognised.
///
/// Lines that aren't valid UTF-8 are skipped. Runs until the reader is exhausted,
/// fails, or the receiver is dropped.
pub fn spawn_line_recognizer<R>(reader: R, events: Sender<RecognitionEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Skipping unreadable speech input: {}", e);
                    continue;
                }
                Err(e) => {
                    error!("Failed to read speech input: {}", e);
                    break;
                }
            };
            let text = line.trim();
            let sent = if text.is_empty() {
                events.send(RecognitionEvent::NoMatch)
            } else {
                events
                    .send(RecognitionEvent::Recognizing(text.to_string()))
                    .and_then(|()| events.send(RecognitionEvent::Recognized(text.to_string())))
            };
            if sent.is_err() {
                debug!("Speech event receiver dropped; stop listening");
                break;
            }
        }
        debug!("Speech input ended");
    })
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::mpsc::channel};

    use super::*;

    #[test]
    fn test_lines_become_recognition_events() {
        let (tx, rx) = channel();
        let handle = spawn_line_recognizer(Cursor::new("Next please\n\n  go back  \n"), tx);
        handle.join().unwrap();

        let events: Vec<RecognitionEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                RecognitionEvent::Recognizing("Next please".into()),
                RecognitionEvent::Recognized("Next please".into()),
                RecognitionEvent::NoMatch,
                RecognitionEvent::Recognizing("go back".into()),
                RecognitionEvent::Recognized("go back".into()),
            ]
        );
    }

    #[test]
    fn test_keeps_listening_after_garbled_line() {
        let (tx, rx) = channel();
        let handle = spawn_line_recognizer(Cursor::new(b"\xff\xfe\nnext\n".to_vec()), tx);
        handle.join().unwrap();

        let events: Vec<RecognitionEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                RecognitionEvent::Recognizing("next".into()),
                RecognitionEvent::Recognized("next".into()),
            ]
        );
    }

    #[test]
    fn test_stops_when_receiver_dropped() {
        let (tx, rx) = channel();
        drop(rx);
        let handle = spawn_line_recognizer(Cursor::new("next\nnext\n"), tx);
        assert!(handle.join().is_ok());
    }
}
