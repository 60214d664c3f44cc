//! 文本会话控制器
//!
//! Menu-driven loop that reads one line per prompt and forwards the choice to
//! [`Game`]. It holds no game rules of its own. Generic over the reader and
//! writer so a whole playthrough can be scripted.
use std::io::{BufRead, Write};

use combat::Species;
use dungeon::{Difficulty, Direction};
use error::{GameError, handle_error};
use items::ItemKind;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::config::GameConfig;
use crate::game::{Game, Phase, Turn};
use crate::render::{
    DungeonRenderer, GameOverRenderer, HudRenderer, InventoryRenderer, MenuRenderer, Palette,
};

/// Which prompt the session shows next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    Help,
    HeroSelect,
    DifficultySelect(Species),
    Traverse,
    GameHelp,
    Inventory,
    ConfirmQuit,
    Battle,
    BattleInventory,
    GameOver,
    Victory,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    palette: Palette,
    game: Option<Game>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let palette = Palette::new(config.color);
        Self {
            input,
            output,
            config,
            palette,
            game: None,
        }
    }

    /// Runs until the player exits or the input ends.
    ///
    /// Only I/O failures and fatal game errors are returned; rejected commands
    /// are shown to the player and the prompt repeats.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.say("Game started! Welcome to mOOn Quest!")?;
        self.say("---------------------------------")?;

        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            debug!(?screen, "session screen");
            screen = match self.show(screen)? {
                Some(next) => next,
                None => {
                    debug!("input closed");
                    Screen::Exit
                }
            };
        }
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows one screen and returns the next; `None` when input is exhausted.
    fn show(&mut self, screen: Screen) -> Result<Option<Screen>, GameError> {
        match screen {
            Screen::MainMenu => self.main_menu(),
            Screen::Help => {
                self.say(&format!("\n{}", MenuRenderer::help(&self.palette)))?;
                Ok(self
                    .prompt("Press Enter to return to main menu...")?
                    .map(|_| Screen::MainMenu))
            }
            Screen::HeroSelect => self.hero_select(),
            Screen::DifficultySelect(class) => self.difficulty_select(class),
            Screen::Traverse => self.traverse(),
            Screen::GameHelp => {
                self.say(&format!("\n{}", MenuRenderer::game_help(&self.palette)))?;
                Ok(self
                    .prompt("Press Enter to return to the game...")?
                    .map(|_| Screen::Traverse))
            }
            Screen::Inventory => self.inventory(),
            Screen::ConfirmQuit => {
                let Some(answer) =
                    self.prompt("Are you sure you want to quit? Progress will be lost. (y/n): ")?
                else {
                    return Ok(None);
                };
                if answer.eq_ignore_ascii_case("y") {
                    self.say("Thanks for playing mOOn Quest!")?;
                    Ok(Some(Screen::Exit))
                } else {
                    Ok(Some(Screen::Traverse))
                }
            }
            Screen::Battle => self.battle(),
            Screen::BattleInventory => self.battle_inventory(),
            Screen::GameOver => {
                self.say(&format!(
                    "\n{}",
                    GameOverRenderer::death("The pillars remain lost in the maze.", &self.palette)
                ))?;
                self.game = None;
                Ok(self
                    .prompt("Press Enter to return to main menu...")?
                    .map(|_| Screen::MainMenu))
            }
            Screen::Victory => {
                if let Some(game) = &self.game {
                    let text = GameOverRenderer::victory(
                        game.hero(),
                        game.maze().difficulty(),
                        &self.palette,
                    );
                    self.say(&format!("\n{text}"))?;
                }
                self.game = None;
                Ok(self
                    .prompt("Press Enter to return to main menu...")?
                    .map(|_| Screen::MainMenu))
            }
            Screen::Exit => Ok(Some(Screen::Exit)),
        }
    }

    fn main_menu(&mut self) -> Result<Option<Screen>, GameError> {
        self.game = None;
        self.say(&MenuRenderer::main_menu(&self.palette))?;
        let Some(answer) = self.prompt("Select an option (1-4): ")? else {
            return Ok(None);
        };
        let next = match answer.as_str() {
            "1" => Screen::HeroSelect,
            "2" => {
                self.say("Load game feature not implemented yet.")?;
                Screen::MainMenu
            }
            "3" => Screen::Help,
            "4" => {
                self.say("Thanks for playing mOOn Quest!")?;
                Screen::Exit
            }
            _ => {
                self.say("Invalid option. Please try again.")?;
                Screen::MainMenu
            }
        };
        Ok(Some(next))
    }

    fn hero_select(&mut self) -> Result<Option<Screen>, GameError> {
        self.say(&format!("\n{}", MenuRenderer::hero_select(&self.palette)))?;
        let Some(answer) = self.prompt("Select your hero (1-4): ")? else {
            return Ok(None);
        };
        let heroes: Vec<Species> = Species::heroes().collect();

        let next = match Self::menu_index(&answer, heroes.len() + 1) {
            Some(i) if i < heroes.len() => {
                self.say(&format!("You selected the {}!", heroes[i]))?;
                Screen::DifficultySelect(heroes[i])
            }
            Some(_) => Screen::MainMenu,
            None => {
                self.say("Invalid option. Please try again.")?;
                Screen::HeroSelect
            }
        };
        Ok(Some(next))
    }

    fn difficulty_select(&mut self, class: Species) -> Result<Option<Screen>, GameError> {
        self.say(&format!("\n{}", MenuRenderer::difficulty_select(&self.palette)))?;
        let Some(answer) = self.prompt("Select difficulty (1-4): ")? else {
            return Ok(None);
        };
        let levels: Vec<Difficulty> = Difficulty::iter().collect();

        let next = match Self::menu_index(&answer, levels.len() + 1) {
            Some(i) if i < levels.len() => {
                self.game = Some(Game::new(class, levels[i], &self.config)?);
                self.say(&format!("You selected {} difficulty!", levels[i]))?;
                Screen::Traverse
            }
            Some(_) => Screen::HeroSelect,
            None => {
                self.say("Invalid option. Please try again.")?;
                Screen::DifficultySelect(class)
            }
        };
        Ok(Some(next))
    }

    fn traverse(&mut self) -> Result<Option<Screen>, GameError> {
        let Some(game) = &self.game else {
            return Ok(Some(Screen::MainMenu));
        };
        let text = format!(
            "\n{}\n\n{}",
            HudRenderer::render(game, &self.palette),
            MenuRenderer::traversal_actions()
        );
        self.say(&text)?;

        let Some(answer) = self.prompt("What would you like to do? ")? else {
            return Ok(None);
        };
        let answer = answer.to_ascii_lowercase();

        if let Ok(direction) = answer.parse::<Direction>() {
            let result = self.game_mut()?.move_hero(direction);
            return self.after_command(result).map(Some);
        }
        let next = match answer.as_str() {
            "i" => Screen::Inventory,
            "m" => {
                let map = DungeonRenderer::minimap(self.game_ref()?.maze());
                self.say(&map)?;
                Screen::Traverse
            }
            "h" => Screen::GameHelp,
            "q" => Screen::ConfirmQuit,
            _ => {
                self.say("Invalid command. Try again.")?;
                Screen::Traverse
            }
        };
        Ok(Some(next))
    }

    fn inventory(&mut self) -> Result<Option<Screen>, GameError> {
        let text = InventoryRenderer::render(self.game_ref()?.hero(), &self.palette);
        self.say(&format!("\n{text}"))?;
        let Some(answer) = self.prompt("What would you like to do? ")? else {
            return Ok(None);
        };

        let kind = match answer.as_str() {
            "1" => ItemKind::HealthPotion,
            "2" => ItemKind::VisionPotion,
            "3" => return Ok(Some(Screen::Traverse)),
            _ => {
                self.say("Invalid option. Please try again.")?;
                return Ok(Some(Screen::Inventory));
            }
        };
        let result = self.game_mut()?.use_item(kind);
        self.report(result)?;
        Ok(Some(Screen::Inventory))
    }

    fn battle(&mut self) -> Result<Option<Screen>, GameError> {
        let game = self.game_ref()?;
        let Some(encounter) = game.maze().encounter() else {
            return Ok(Some(Screen::Traverse));
        };
        let text = MenuRenderer::battle(game.hero(), encounter, &self.palette);
        self.say(&format!("\n{text}"))?;

        let Some(answer) = self.prompt("What would you like to do? ")? else {
            return Ok(None);
        };
        let result = match answer.as_str() {
            "1" => self.game_mut()?.attack(),
            "2" => self.game_mut()?.use_ultimate(),
            "3" => return Ok(Some(Screen::BattleInventory)),
            "4" => self.game_mut()?.flee(),
            _ => {
                self.say("Invalid option. Please try again.")?;
                return Ok(Some(Screen::Battle));
            }
        };
        self.after_command(result).map(Some)
    }

    fn battle_inventory(&mut self) -> Result<Option<Screen>, GameError> {
        let text = InventoryRenderer::render_battle(self.game_ref()?.hero(), &self.palette);
        self.say(&format!("\n{text}"))?;
        let Some(answer) = self.prompt("What would you like to do? ")? else {
            return Ok(None);
        };

        match answer.as_str() {
            "1" => match self.game_mut()?.use_item(ItemKind::HealthPotion) {
                Err(e) if !e.is_fatal() => {
                    self.say(&handle_error(&e))?;
                    Ok(Some(Screen::BattleInventory))
                }
                result => self.after_command(result).map(Some),
            },
            "2" => Ok(Some(Screen::Battle)),
            _ => {
                self.say("Invalid option. Please try again.")?;
                Ok(Some(Screen::BattleInventory))
            }
        }
    }

    /// Prints the outcome of a game command and picks the screen for the
    /// phase the game is now in.
    fn after_command(&mut self, result: Result<Turn, GameError>) -> Result<Screen, GameError> {
        self.report(result)?;
        let next = match self.game_ref()?.phase() {
            Phase::Exploring => Screen::Traverse,
            Phase::Battle { .. } => Screen::Battle,
            Phase::Won => Screen::Victory,
            Phase::Dead => Screen::GameOver,
        };
        Ok(next)
    }

    /// Narration on success, the player-facing message on a rejection. Fatal
    /// errors end the session.
    fn report(&mut self, result: Result<Turn, GameError>) -> Result<(), GameError> {
        match result {
            Ok(turn) => self.say(&turn.narration),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!(error = %e, "command rejected");
                self.say(&handle_error(&e))
            }
        }
    }

    /// 1-based menu choice to a 0-based index below `options`.
    fn menu_index(answer: &str, options: usize) -> Option<usize> {
        match answer.parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => Some(n - 1),
            _ => None,
        }
    }

    fn game_ref(&self) -> Result<&Game, GameError> {
        self.game
            .as_ref()
            .ok_or_else(|| GameError::UnknownEntityVariant("no game in progress".into()))
    }

    fn game_mut(&mut self) -> Result<&mut Game, GameError> {
        self.game
            .as_mut()
            .ok_or_else(|| GameError::UnknownEntityVariant("no game in progress".into()))
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, GameError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
