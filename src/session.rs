//! Menu-driven play session.
//!
//! A [`Session`] owns everything that lives across games: the terminal,
//! both players, the leaderboard store and the running score.

use crate::leaderboard::{self, LeaderboardStore};
use crate::players::{HumanPlayer, Player};
use crate::{Board, Console, GameError, Outcome, play_game, welcome};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

const MENU_HEADER: &str = " \n\n-------------------- Menu--------------------\n ";
const MENU_PROMPT: &str = "Enter what would you like to do: ";
const NAME_PROMPT: &str = "Enter your name: ";

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Play one game.
    Play,
    /// Save the running score under a name.
    Save,
    /// Show the leaderboard.
    View,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// Text the user types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            Self::Play => "1",
            Self::Save => "2",
            Self::View => "3",
            Self::Quit => "q",
        }
    }

    /// Description shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Start The Game",
            Self::Save => "Save Your Score",
            Self::View => "View Scoreboard",
            Self::Quit => "Stop Playing",
        }
    }

    /// Matches input against the keys exactly; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|choice| choice.key() == input)
    }
}

/// One interactive run of the program.
#[derive(Debug)]
pub struct Session<R, W, C> {
    console: Console<R, W>,
    human: HumanPlayer,
    computer: C,
    store: LeaderboardStore,
    total_score: i64,
}

impl<R, W, C> Session<R, W, C>
where
    R: BufRead,
    W: Write,
    C: Player,
{
    /// Creates a session with a zero score.
    pub fn new(console: Console<R, W>, computer: C, store: LeaderboardStore) -> Self {
        Self {
            console,
            human: HumanPlayer::new("You"),
            computer,
            store,
            total_score: 0,
        }
    }

    /// Sum of outcomes of every game played so far.
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Borrows the console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Consumes the session and returns its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Shows the welcome banner, then serves the menu until the user quits
    /// or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), GameError> {
        welcome(&mut self.console, &Board::new().numbered())?;
        loop {
            let Some(answer) = self.menu()? else {
                info!("input closed at menu, leaving");
                return self.quit();
            };
            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Play) => self.play_round().map(drop)?,
                Some(MenuChoice::Save) => self.save_score()?,
                Some(MenuChoice::View) => self.view_leaderboard()?,
                Some(MenuChoice::Quit) => return self.quit(),
                None => debug!(%answer, "ignoring unknown menu choice"),
            }
        }
    }

    fn menu(&mut self) -> Result<Option<String>, GameError> {
        self.console.say(MENU_HEADER)?;
        for choice in MenuChoice::iter() {
            self.console
                .say(format_args!("{} - {}", choice.key(), choice.label()))?;
        }
        self.console.prompt(MENU_PROMPT)
    }

    /// Plays one game and adds its outcome to the running score.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome, GameError> {
        let outcome = play_game(&mut self.human, &mut self.computer, &mut self.console)?;
        self.total_score += outcome.score();
        info!(%outcome, total = self.total_score, "round finished");
        self.console
            .say(format_args!("Your current score is: {}", self.total_score))?;
        Ok(outcome)
    }

    /// Asks for a name and writes the running score to the leaderboard.
    ///
    /// Storage failures are reported to the user and do not end the session.
    #[instrument(skip(self))]
    pub fn save_score(&mut self) -> Result<(), GameError> {
        let name = loop {
            let answer = self
                .console
                .prompt(NAME_PROMPT)?
                .ok_or(GameError::InputClosed {
                    expecting: "a player name",
                })?;
            let name = answer.trim();
            if !name.is_empty() {
                break name.to_string();
            }
            self.console.say("Please enter a name.")?;
        };

        match self.store.save(&name, self.total_score) {
            Ok(_) => self.console.say(format_args!(
                "Saved a score of {} for {name}.",
                self.total_score
            )),
            Err(err) => {
                warn!(error = %err, "saving score failed");
                self.console
                    .say(format_args!("Could not save your score: {err}"))
            }
        }
    }

    /// Loads and prints the leaderboard, or explains why it cannot.
    #[instrument(skip(self))]
    pub fn view_leaderboard(&mut self) -> Result<(), GameError> {
        match self.store.load() {
            Ok(leaders) => leaderboard::display(&leaders, &mut self.console),
            Err(err) if err.is_missing() => {
                debug!(error = %err, "no leaderboard file");
                self.console.say("No scores have been saved yet.")
            }
            Err(err) => {
                warn!(error = %err, "loading leaderboard failed");
                self.console
                    .say(format_args!("Could not read the leaderboard: {err}"))
            }
        }
    }

    fn quit(&mut self) -> Result<(), GameError> {
        self.console
            .say("Thank you for playing the \"Unbeatable Noughts and Crosses\" game.")?;
        self.console.say("Good bye")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::RandomPlayer;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    type TestSession = Session<Cursor<String>, Vec<u8>, RandomPlayer>;

    fn session(input: &str, store: LeaderboardStore) -> TestSession {
        let console = Console::new(Cursor::new(input.to_string()), Vec::new());
        Session::new(console, RandomPlayer::seeded("Computer", Some(5)), store)
    }

    fn output(session: TestSession) -> String {
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    #[test]
    fn test_menu_parse_is_literal() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("Q"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("4"), None);
    }

    #[test]
    fn test_unknown_choice_redisplays_menu() {
        let dir = tempdir().unwrap();
        let mut s = session("x\n\nhello\nq\n", LeaderboardStore::new(dir.path().join("lb.txt")));
        s.run().unwrap();
        let text = output(s);
        assert_eq!(text.matches(MENU_PROMPT).count(), 4);
        assert!(text.ends_with("Good bye\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let dir = tempdir().unwrap();
        let mut s = session("", LeaderboardStore::new(dir.path().join("lb.txt")));
        s.run().unwrap();
        assert!(output(s).contains("Good bye"));
    }

    #[test]
    fn test_save_and_view() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lb.txt");
        let mut s = session("2\n  Ann \n3\nq\n", LeaderboardStore::new(&path));
        s.run().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Ann":0}"#);
        let text = output(s);
        assert!(text.contains("Leaderboard\n Ann: 0\n"));
    }

    #[test]
    fn test_blank_name_is_asked_again() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lb.txt");
        let mut s = session("2\n   \nBo\nq\n", LeaderboardStore::new(&path));
        s.run().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Bo":0}"#);
        assert_eq!(output(s).matches(NAME_PROMPT).count(), 2);
    }

    #[test]
    fn test_view_without_file_reports_and_continues() {
        let dir = tempdir().unwrap();
        let mut s = session("3\nq\n", LeaderboardStore::new(dir.path().join("missing.txt")));
        s.run().unwrap();
        let text = output(s);
        assert!(text.contains("No scores have been saved yet."));
        assert!(text.ends_with("Good bye\n"));
    }

    #[test]
    fn test_view_malformed_file_reports_and_continues() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lb.txt");
        fs::write(&path, "not json").unwrap();
        let mut s = session("3\nq\n", LeaderboardStore::new(&path));
        s.run().unwrap();
        assert!(output(s).contains("Could not read the leaderboard"));
    }

    #[test]
    fn test_play_round_updates_score() {
        let dir = tempdir().unwrap();
        // Try every cell in order; occupied ones are rejected and re-asked.
        let attempts: String = (0..3)
            .flat_map(|r| (0..3).map(move |c| format!("{r}\n{c}\n")))
            .collect::<String>()
            .repeat(5);
        let mut s = session(&attempts, LeaderboardStore::new(dir.path().join("lb.txt")));

        let outcome = s.play_round().unwrap();
        assert_eq!(s.total_score(), outcome.score());
        let text = output(s);
        assert!(text.contains(&format!("Your current score is: {}", outcome.score())));
    }
}
