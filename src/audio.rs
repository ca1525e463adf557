/// Sound cues.  The terminal offers a single voice: the bell.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Fire,
    EnemyDown,
}

#[derive(Debug)]
pub struct Audio {
    enabled: bool,
}

impl Audio {
    pub fn new(enabled: bool) -> Self {
        Audio { enabled }
    }

    /// Queue the cue; it is emitted with the next flush.
    pub fn play<W: Write>(&self, out: &mut W, cue: Cue) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        log::trace!("cue {:?}", cue);
        out.queue(Print('\x07'))?;
        Ok(())
    }
}
