//! Menu loop over an input and an output stream

use std::io::{self, BufRead, Write};

use th_core::{Command, Game, GameError, GameMode, Hunter, Item, RandomOutcome, ShopChoice};

use crate::theme::Theme;

const MENU: [&str; 7] = [
    "(B)uy something at the shop.",
    "(S)ell something at the shop.",
    "(M)ove on to a different town.",
    "(L)ook for trouble!",
    "(D)ig for gold!",
    "(H)unt for treasure!",
    "Give up the hunt and e(X)it.",
];

const MODE_QUESTION: &str = "Mode? Easy/Normal/Hard/Test/Samurai (e/n/h/t/s): ";
const GAME_OVER: &str = "You have lost the brawl and all your gold...\nGame Over!";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to exit
    Exited,
    /// A brawl left the hunter in debt
    GameOver,
    /// Input ran out
    EndOfInput,
}

/// Drives a game from line-based input
pub struct Driver<I, O> {
    input: I,
    output: O,
    theme: Theme,
}

impl<I: BufRead, O: Write> Driver<I, O> {
    pub fn new(input: I, output: O, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Next trimmed line, or None at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Greet the player and ask for whatever the command line left out.
    ///
    /// Returns None if input ends before both answers are known.
    pub fn welcome(
        &mut self,
        name: Option<String>,
        mode: Option<GameMode>,
    ) -> io::Result<Option<(String, GameMode)>> {
        writeln!(self.output, "Welcome to TREASURE HUNTER!!")?;
        writeln!(self.output, "Going hunting for the big treasure, eh?")?;

        let name = match name {
            Some(name) => name.to_lowercase(),
            None => match self.prompt("What's your name, Hunter? ")? {
                Some(answer) => answer.to_lowercase(),
                None => return Ok(None),
            },
        };
        let mode = match mode {
            Some(mode) => mode,
            None => match self.prompt(MODE_QUESTION)? {
                Some(answer) => GameMode::from_answer(&answer),
                None => return Ok(None),
            },
        };
        log::debug!("welcome: {} picked {}", name, mode);
        Ok(Some((name, mode)))
    }

    /// Play until the player exits, the game ends, or input runs out.
    pub fn run<R: RandomOutcome>(&mut self, game: &mut Game<R>) -> io::Result<SessionEnd> {
        loop {
            self.show_status(game)?;
            let Some(answer) = self.prompt("What's your next move? ")? else {
                return Ok(SessionEnd::EndOfInput);
            };

            match answer.parse::<Command>() {
                Ok(Command::Exit) => {
                    writeln!(self.output, "Fare thee well, {}!", game.hunter().name())?;
                    return Ok(SessionEnd::Exited);
                }
                Ok(command) => self.process(game, command)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }

            if game.is_over() {
                let theme = self.theme;
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "{}",
                    theme.paint(game.town().latest_news(), theme.danger)
                )?;
                writeln!(self.output, "{}", theme.paint(GAME_OVER, theme.danger))?;
                return Ok(SessionEnd::GameOver);
            }
        }
    }

    fn show_status<R: RandomOutcome>(&mut self, game: &Game<R>) -> io::Result<()> {
        let theme = self.theme;
        let town = game.town();

        writeln!(self.output)?;
        writeln!(self.output, "{}", town.latest_news())?;
        writeln!(self.output, "***")?;
        writeln!(self.output, "{}", game.hunter())?;
        writeln!(
            self.output,
            "Treasure: {}",
            theme.paint(&treasure_line(game.hunter()), theme.treasure)
        )?;
        writeln!(
            self.output,
            "This nice little town is surrounded by {}.",
            theme.paint(&town.terrain().to_string(), theme.terrain)
        )?;
        for entry in MENU {
            writeln!(self.output, "{}", theme.paint(entry, theme.menu))?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn process<R: RandomOutcome>(
        &mut self,
        game: &mut Game<R>,
        command: Command,
    ) -> io::Result<()> {
        // outcomes land in the town news, shown on the next status
        let refused: Option<GameError> = match command {
            Command::Buy => return self.visit_shop(game, ShopChoice::Buy),
            Command::Sell => return self.visit_shop(game, ShopChoice::Sell),
            Command::Move => match game.move_on() {
                Ok(crossing) if crossing.crossed() => {
                    writeln!(self.output, "{}", crossing)?;
                    None
                }
                Ok(_) => None,
                Err(err) => Some(err),
            },
            Command::Trouble => game.look_for_trouble().err(),
            Command::Dig => game.dig().err(),
            Command::Hunt => game.hunt_treasure().err(),
            Command::Exit => None,
        };

        if let Some(err) = refused {
            writeln!(self.output, "{}", err)?;
        }
        Ok(())
    }

    fn visit_shop<R: RandomOutcome>(
        &mut self,
        game: &mut Game<R>,
        choice: ShopChoice,
    ) -> io::Result<()> {
        let has_sword = game.hunter().has_item(Item::Sword);
        let listing = game.town().shop().listing(choice, has_sword);
        writeln!(self.output, "{}", listing)?;

        let question = match choice {
            ShopChoice::Buy => "What're you lookin' to buy? ",
            ShopChoice::Sell => "What're you lookin' to sell? ",
        };
        let Some(answer) = self.prompt(question)? else {
            return Ok(());
        };
        if answer.is_empty() {
            return Ok(());
        }

        match answer.parse::<Item>() {
            Ok(item) => match game.shop(choice, item) {
                Ok(receipt) => writeln!(self.output, "{}", receipt)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            },
            Err(_) => {
                log::debug!("unknown item {:?}", answer);
                writeln!(self.output, "We ain't got none of those.")?;
            }
        }
        Ok(())
    }
}

fn treasure_line(hunter: &Hunter) -> String {
    let names: Vec<String> = hunter
        .treasure_collection()
        .iter()
        .map(|treasure| treasure.to_string())
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
