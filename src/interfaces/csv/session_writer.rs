use crate::application::view::SessionView;
use crate::error::Result;
use std::io::Write;

/// Writes the final state of a session.
///
/// CSV output has two tables separated by a blank line: the players
/// (`player,wallet,available`) and the settled rounds, most recent first
/// (`round,pot,winner,committed`).
pub struct SessionWriter<W: Write> {
    writer: W,
}

impl<W: Write> SessionWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_csv(&mut self, view: &SessionView<'_>) -> Result<()> {
        {
            let mut players = csv::Writer::from_writer(&mut self.writer);
            players.write_record(["player", "wallet", "available"])?;
            for player in &view.players {
                players.write_record([
                    player.name.to_string(),
                    player.wallet.to_string(),
                    player.available.to_string(),
                ])?;
            }
            players.flush()?;
        }

        writeln!(self.writer)?;

        let mut history = csv::Writer::from_writer(&mut self.writer);
        history.write_record(["round", "pot", "winner", "committed"])?;
        for record in view.history {
            history.write_record([
                record.round.to_string(),
                record.pot.to_string(),
                record.winner.clone(),
                record.committed_summary().to_string(),
            ])?;
        }
        history.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, view: &SessionView<'_>) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, view)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
