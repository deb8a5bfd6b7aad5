//! Keyboard capture.
//!
//! A background thread blocks on crossterm's event stream, decodes key presses
//! into [`InputAction`]s and hands them to the game loop over a bounded
//! channel. The loop side never blocks: it takes at most one queued action per
//! tick and leaves the rest for later ticks.

use std::{
    io,
    sync::mpsc::{self, Receiver, SyncSender, TryRecvError},
    thread::{self, JoinHandle},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info, warn};

/// Pending key presses held between ticks before the reader thread waits.
pub const INPUT_QUEUE_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
}

/// Map a terminal key event to a game action. Unbound keys yield `None`.
pub fn decode_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }
        KeyCode::Char('q') => Some(InputAction::Quit),
        KeyCode::Char('w') => Some(InputAction::Player1Up),
        KeyCode::Char('s') => Some(InputAction::Player1Down),
        KeyCode::Up => Some(InputAction::Player2Up),
        KeyCode::Down => Some(InputAction::Player2Down),
        _ => None,
    }
}

pub trait InputSource {
    /// Next queued action, or `None` when nothing is pending. Never blocks.
    fn poll(&mut self) -> Option<InputAction>;
}

/// Consumer end of the key channel.
pub struct ChannelInput {
    receiver: Receiver<InputAction>,
    disconnected: bool,
}

impl ChannelInput {
    pub fn new(receiver: Receiver<InputAction>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self) -> Option<InputAction> {
        match self.receiver.try_recv() {
            Ok(action) => Some(action),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.disconnected {
                    warn!("keyboard reader has stopped, no more input will arrive");
                    self.disconnected = true;
                }
                None
            }
        }
    }
}

/// Start the reader thread and return the polling end of its channel.
pub fn spawn_keyboard_listener() -> io::Result<(ChannelInput, JoinHandle<()>)> {
    let (sender, receiver) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
    let handle = thread::Builder::new()
        .name("keyboard".into())
        .spawn(move || read_keys(sender))?;

    Ok((ChannelInput::new(receiver), handle))
}

fn read_keys(sender: SyncSender<InputAction>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                error!("failed to read terminal event: {}", err);
                return;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        let Some(action) = decode_key(key) else {
            continue;
        };

        if sender.send(action).is_err() {
            info!("game loop has gone away, keyboard reader exiting");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn player_keys() {
        assert_eq!(
            decode_key(press(KeyCode::Char('w'))),
            Some(InputAction::Player1Up)
        );
        assert_eq!(
            decode_key(press(KeyCode::Char('s'))),
            Some(InputAction::Player1Down)
        );
        assert_eq!(decode_key(press(KeyCode::Up)), Some(InputAction::Player2Up));
        assert_eq!(
            decode_key(press(KeyCode::Down)),
            Some(InputAction::Player2Down)
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(decode_key(press(KeyCode::Char('q'))), Some(InputAction::Quit));
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(decode_key(press(KeyCode::Char('c'))), None);
        assert_eq!(decode_key(press(KeyCode::Char('W'))), None);
        assert_eq!(decode_key(press(KeyCode::Left)), None);
        assert_eq!(decode_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(decode_key(key), None);

        key.kind = KeyEventKind::Repeat;
        assert_eq!(decode_key(key), None);
    }

    #[test]
    fn empty_channel_polls_none_repeatedly() {
        let (_sender, receiver) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
        let mut input = ChannelInput::new(receiver);
        for _ in 0..5 {
            assert_eq!(input.poll(), None);
        }
    }

    #[test]
    fn poll_takes_one_action_at_a_time() {
        let (sender, receiver) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
        let mut input = ChannelInput::new(receiver);
        sender.send(InputAction::Player1Up).unwrap();
        sender.send(InputAction::Player2Down).unwrap();

        assert_eq!(input.poll(), Some(InputAction::Player1Up));
        assert_eq!(input.poll(), Some(InputAction::Player2Down));
        assert_eq!(input.poll(), None);
    }

    #[test]
    fn disconnected_channel_polls_none() {
        let (sender, receiver) = mpsc::sync_channel::<InputAction>(INPUT_QUEUE_DEPTH);
        let mut input = ChannelInput::new(receiver);
        drop(sender);
        assert_eq!(input.poll(), None);
        assert_eq!(input.poll(), None);
    }
}
