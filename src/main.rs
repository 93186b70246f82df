//! Gravenhold - Entry Point
//!
//! The console shell around the campaign core: it renders the event
//! stream, parses menu input (re-prompting on anything invalid), and owns
//! the session/restart loop. The core itself never touches stdin/stdout.

use std::io::{self, Write};

use clap::Parser;

use gravenhold::campaign::{Campaign, CampaignEvent, CampaignIo};
use gravenhold::catalog::{Catalog, ClassSpec, Weapon};
use gravenhold::combat::SeededDice;
use gravenhold::core::config::CampaignConfig;
use gravenhold::core::error::{GameError, Result};
use gravenhold::core::types::ClassId;
use gravenhold::encounter::Side;
use gravenhold::player::Player;
use gravenhold::progression::{LevelUpOutcome, LevelUpPreview};

#[derive(Parser, Debug)]
#[command(name = "gravenhold", about = "Turn-based combat campaign")]
struct Args {
    /// Victories needed to finish the campaign
    #[arg(long, default_value_t = 5)]
    wins: u32,

    /// Dice seed; omit for a fresh run every time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("gravenhold=info")
        .init();

    let args = Args::parse();
    let catalog = Catalog::standard();

    if !ask_yes_no("Begin your journey? (y/n): ")? {
        println!("Farewell!");
        return Ok(());
    }

    let mut shell = ConsoleShell::default();
    loop {
        let seed = args.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, wins = args.wins, "starting session");
        let config = CampaignConfig {
            wins_to_finish: args.wins,
            seed,
        };
        let campaign = Campaign::new(&catalog, config);
        let mut dice = SeededDice::new(seed);

        let mut player = campaign.recruit(&mut shell, &mut dice)?;
        print_player_sheet(&player, &catalog)?;
        campaign.run(&mut player, &mut shell, &mut dice)?;

        if !shell.confirm_restart() {
            println!("Thanks for playing!");
            break;
        }
    }
    Ok(())
}

fn print_player_sheet(player: &Player, catalog: &Catalog) -> Result<()> {
    let weapon = catalog.weapon(player.weapon)?;
    println!("\n=== Hero Sheet ===");
    println!("Name: {}", player.name);
    println!(
        "Levels: Warrior={} Barbarian={} Rogue={} (total {})",
        player.class_level(ClassId::Warrior),
        player.class_level(ClassId::Barbarian),
        player.class_level(ClassId::Rogue),
        player.total_level()
    );
    println!("HP: {}/{}", player.hp, player.max_hp);
    println!(
        "STR: {} | DEX: {} | STA: {}",
        player.attributes.strength, player.attributes.dexterity, player.attributes.stamina
    );
    println!(
        "Weapon: {} (damage {}, {})",
        weapon.name,
        weapon.damage,
        weapon.damage_type.label()
    );
    println!();
    Ok(())
}

/// Read one trimmed line from stdin
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Parse a 1-based menu selection; out-of-range input is an `InvalidChoice`
fn parse_menu_choice(input: &str, max: usize) -> Result<usize> {
    match input.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n - 1),
        _ => Err(GameError::InvalidChoice(format!(
            "expected a number between 1 and {max}, got '{input}'"
        ))),
    }
}

/// Ask until the answer is a clear yes or no
fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    loop {
        match read_line(prompt)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Console implementation of the collaborator boundary
///
/// Remembers the current enemy's name so turn reports read naturally.
#[derive(Default)]
struct ConsoleShell {
    current_enemy: String,
}

impl ConsoleShell {
    fn menu_pick(&self, prompt: &str, max: usize) -> usize {
        loop {
            let line = read_line(prompt).unwrap_or_default();
            match parse_menu_choice(&line, max) {
                Ok(index) => return index,
                Err(err) => println!("{err}"),
            }
        }
    }

    fn render_turn(&self, report: &gravenhold::encounter::TurnReport) {
        match (report.attacker, report.hit) {
            (Side::Player, true) => {
                println!(
                    "You hit for {} damage. {} is at {} HP.",
                    report.damage, self.current_enemy, report.defender_hp
                );
            }
            (Side::Player, false) => println!("You miss!"),
            (Side::Enemy, true) => {
                println!(
                    "{} hits you for {} damage. You are at {} HP.",
                    self.current_enemy, report.damage, report.defender_hp
                );
            }
            (Side::Enemy, false) => println!("{} misses!", self.current_enemy),
        }
    }
}

impl CampaignIo for ConsoleShell {
    fn choose_starting_class(&mut self, classes: &[&ClassSpec]) -> ClassId {
        println!("Choose your starting class:");
        for (i, class) in classes.iter().enumerate() {
            println!("{}. {}", i + 1, class.name);
        }
        let index = self.menu_pick("Class number: ", classes.len());
        classes[index].id
    }

    fn provide_name(&mut self) -> String {
        loop {
            match read_line("Name your hero: ") {
                Ok(name) if !name.is_empty() => return name,
                Ok(_) => println!("A name cannot be empty."),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn confirm_attack(&mut self) {
        loop {
            match read_line("Press 'a' to attack: ") {
                Ok(input) if input.eq_ignore_ascii_case("a") => return,
                _ => {}
            }
        }
    }

    fn choose_level_up_class(&mut self, previews: &[LevelUpPreview]) -> ClassId {
        println!("Level up! Choose a class:");
        for (i, preview) in previews.iter().enumerate() {
            println!(
                "{}. {} (level {} -> {}) - grants: {}",
                i + 1,
                preview.class_name,
                preview.current_level,
                preview.next_level,
                preview.perk
            );
        }
        let index = self.menu_pick("Class number: ", previews.len());
        previews[index].class
    }

    fn confirm_loot_swap(&mut self, offered: &Weapon, current: &Weapon) -> bool {
        println!("You found a weapon:");
        println!(
            "- Offered: {} | damage {}, {}",
            offered.name,
            offered.damage,
            offered.damage_type.label()
        );
        println!(
            "- Current: {} | damage {}, {}",
            current.name,
            current.damage,
            current.damage_type.label()
        );
        ask_yes_no("Swap weapons? (y/n): ").unwrap_or(false)
    }

    fn confirm_restart(&mut self) -> bool {
        ask_yes_no("\nPlay again? (y/n): ").unwrap_or(false)
    }

    fn notify(&mut self, event: &CampaignEvent) {
        match event {
            CampaignEvent::EncounterStarted {
                enemy_name,
                enemy_hp,
                first,
                ..
            } => {
                self.current_enemy = enemy_name.to_string();
                println!("\nA {enemy_name} ({enemy_hp} HP) attacks!");
                match first {
                    Side::Player => println!("You are quicker and go first."),
                    Side::Enemy => println!("The {enemy_name} goes first."),
                }
            }
            CampaignEvent::TurnResolved(report) => self.render_turn(report),
            CampaignEvent::EncounterWon { .. } => {
                println!("\nThe {} is defeated!", self.current_enemy);
            }
            CampaignEvent::PlayerFell => println!("\nYou have fallen in battle..."),
            CampaignEvent::Healed { hp, max_hp } => {
                println!("Your health is restored: {hp}/{max_hp}");
            }
            CampaignEvent::WeaponEquipped { name, .. } => println!("You equip the {name}."),
            CampaignEvent::WeaponKept { .. } => println!("You keep your current weapon."),
            CampaignEvent::LevelUp(LevelUpOutcome::Applied {
                new_level,
                max_hp,
                perk,
                ..
            }) => {
                println!("Level {new_level} reached! Max HP is now {max_hp}.");
                println!("Perk: {perk}");
            }
            CampaignEvent::LevelUp(LevelUpOutcome::CapReached) => {
                println!("Level cap reached (3). The journey continues.");
            }
            CampaignEvent::Progress { wins, target } => println!("Victories: {wins}/{target}\n"),
            CampaignEvent::CampaignWon => println!("\nCongratulations! You finished the game!"),
            CampaignEvent::CampaignLost => println!("Game over."),
        }
    }
}
