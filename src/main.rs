use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use titleforge::app::{App, Tab};
use titleforge::constants::*;
use titleforge::game_logic::CharmKind;
use titleforge::market::tick_market;
use titleforge::save_manager::{SaveData, SaveManager};
use titleforge::ui::draw_ui;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("titleforge {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Title Forge - Terminal Collectible Forge\n");
                println!("Usage: titleforge [--version | --help]\n");
                println!("Set TITLEFORGE_LORE_KEY to enable lore generation and chaos fusion.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'titleforge --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let save_manager = SaveManager::new()?;
    let mut app = if save_manager.save_exists() {
        match save_manager.load() {
            Ok(data) => App::new(data.player, data.trends),
            Err(e) => {
                eprintln!("Warning: could not load save ({}), starting fresh.", e);
                App::fresh()
            }
        }
    } else {
        App::fresh()
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut app, &save_manager);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    save_manager: &SaveManager,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_market_tick = Instant::now();
    let mut last_movement_tick = Instant::now();
    let mut last_autosave = Instant::now();
    let mut next_spawn = Instant::now();

    loop {
        app.drain_lore();

        if last_market_tick.elapsed() >= Duration::from_secs(MARKET_TICK_SECONDS) {
            tick_market(&mut app.trends, &mut rng);
            last_market_tick = Instant::now();
        }

        if app.defense.active {
            if last_movement_tick.elapsed() >= Duration::from_millis(DEFENSE_MOVEMENT_TICK_MS) {
                app.defense_tick();
                last_movement_tick = Instant::now();
            }
            if app.defense.active && Instant::now() >= next_spawn {
                app.defense.spawn_enemy(&mut rng);
                next_spawn = Instant::now() + Duration::from_millis(app.defense.spawn_period());
            }
        }

        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            save_manager.save(&SaveData::new(app.player.clone(), app.trends.clone()))?;
            last_autosave = Instant::now();
        }

        terminal.draw(|frame| draw_ui(frame, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('q') => {
                if app.defense.active {
                    app.defense.stop();
                    app.push_status("Siege abandoned.");
                } else {
                    break;
                }
            }
            KeyCode::Tab => {
                app.tab = match app.tab {
                    Tab::Forge => Tab::Arsenal,
                    Tab::Arsenal => Tab::Market,
                    Tab::Market => Tab::Defense,
                    Tab::Defense => Tab::Forge,
                };
            }
            KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
            KeyCode::Char('f') => app.forge(&mut rng),
            KeyCode::Char('w') => app.forge_weapon(&mut rng),
            KeyCode::Char('s') => app.sell_selected(),
            KeyCode::Char(' ') => app.toggle_mark(),
            KeyCode::Char('x') => app.sacrifice_marked(),
            KeyCode::Char('c') => app.fuse_marked(),
            KeyCode::Char('l') => app.buy_charm(CharmKind::Luck),
            KeyCode::Char('p') => app.buy_charm(CharmKind::Purity),
            KeyCode::Char('y') => app.buy_charm(CharmKind::Synergy),
            KeyCode::Char('1') => app.switch_world(1),
            KeyCode::Char('2') => app.switch_world(2),
            KeyCode::Char('3') => app.switch_world(3),
            KeyCode::Enter => match app.tab {
                Tab::Forge => app.equip_selected_title(),
                Tab::Arsenal => app.equip_selected_weapon(),
                _ => {}
            },
            KeyCode::Char('d') => {
                if !app.defense.active {
                    next_spawn = Instant::now();
                    last_movement_tick = Instant::now();
                }
                app.start_defense();
            }
            KeyCode::Char('a') => app.attack_selected_enemy(),
            _ => {}
        }
    }

    save_manager.save(&SaveData::new(app.player.clone(), app.trends.clone()))?;
    Ok(())
}
