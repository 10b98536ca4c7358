/// Entry point and demo arena loop.
///
/// A fixed battle scene with two combatants; keys fire the combat
/// events a real turn loop would emit, so every beat of the effects
/// engine can be watched against the live renderer.

mod config;
mod domain;
mod fx;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::KeyCode;

use config::AnimConfig;
use domain::entity::{Combatant, IconRect, Strike};
use domain::style::{AttackKind, Hue, Tint};
use fx::animator::BattleAnimator;
use fx::particles::Trajectory;
use fx::surface::{Surface, SurfaceHandle};
use ui::input::InputState;
use ui::renderer::BattleScreen;

const ARENA_COLS: i32 = 72;
const ARENA_ROWS: i32 = 22;
const FRAME_SLEEP: Duration = Duration::from_millis(33);

/// One scripted move per demo key. Types are given by name, the way
/// move data would arrive from a loaded moveset; unknown names render
/// with the normal style.
struct DemoMove {
    key: char,
    name: &'static str,
    type_name: &'static str,
    factor: f64,
    damage: i32,
    effectiveness: f64,
    ranged: Option<Trajectory>,
    miss: bool,
}

const MOVES: &[DemoMove] = &[
    DemoMove {
        key: '1', name: "Tackle", type_name: "normal",
        factor: 1.0, damage: 3, effectiveness: 1.0, ranged: None, miss: false,
    },
    DemoMove {
        key: '2', name: "Flame Lash", type_name: "fire",
        factor: 1.2, damage: 7, effectiveness: 1.5,
        ranged: Some(Trajectory::Line), miss: false,
    },
    DemoMove {
        key: '3', name: "Aqua Jet", type_name: "water",
        factor: 1.0, damage: 4, effectiveness: 0.5,
        ranged: Some(Trajectory::Line), miss: false,
    },
    DemoMove {
        key: '4', name: "Thunder Arc", type_name: "electro",
        factor: 1.0, damage: 12, effectiveness: 1.3,
        ranged: Some(Trajectory::Arc), miss: false,
    },
    DemoMove {
        key: '5', name: "Grave Chill", type_name: "undead",
        factor: 1.5, damage: 6, effectiveness: 1.0, ranged: None, miss: false,
    },
    DemoMove {
        key: 'm', name: "Rock Hurl", type_name: "stone",
        factor: 1.5, damage: 9, effectiveness: 1.5, ranged: None, miss: true,
    },
];

const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc];

fn main() {
    let config = AnimConfig::load();

    let screen = Rc::new(RefCell::new(BattleScreen::new(ARENA_COLS, ARENA_ROWS)));
    if let Err(e) = screen.borrow_mut().init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let hero = Combatant::new("Ruffy", IconRect { x: 6, y: 13, width: 13, height: 5 });
    let foe = Combatant::new("Karpi", IconRect { x: 50, y: 4, width: 13, height: 5 });
    paint_scene(&screen, &hero, &foe);

    let handle: SurfaceHandle = screen.clone();
    let mut animator = BattleAnimator::new(handle, &config);

    demo_loop(&screen, &mut animator, &hero, &foe);

    if let Err(e) = screen.borrow_mut().cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    println!();
    println!("battlebeat demo over.");
}

fn demo_loop(
    screen: &Rc<RefCell<BattleScreen>>,
    animator: &mut BattleAnimator,
    hero: &Combatant,
    foe: &Combatant,
) {
    let mut input = InputState::new();

    loop {
        input.drain_events();
        if input.ctrl_c_pressed() || input.any_pressed(KEYS_QUIT) {
            break;
        }

        for mv in MOVES {
            if input.was_pressed(KeyCode::Char(mv.key)) {
                let verb = if mv.miss { "missed with" } else { "used" };
                set_caption(screen, &format!("{} {} {}!", hero.name, verb, mv.name));
                let strike = Strike {
                    kind: AttackKind::from_name(mv.type_name),
                    factor: mv.factor,
                };
                if let Some(trajectory) = mv.ranged {
                    if !mv.miss {
                        animator.play_projectile(hero, foe, strike, trajectory);
                    }
                }
                animator.play_attack(hero, foe, strike, mv.damage, mv.effectiveness, mv.miss);
            }
        }

        if input.was_pressed(KeyCode::Char('e')) {
            set_caption(screen, &format!("{} strikes back!", foe.name));
            let strike = Strike { kind: AttackKind::Plant, factor: 1.1 };
            animator.play_attack(foe, hero, strike, 5, 1.0, false);
        }
        if input.was_pressed(KeyCode::Char('b')) {
            set_caption(screen, &format!("{} is burning!", foe.name));
            animator.play_status_effect(foe, "burning", true);
        }
        if input.was_pressed(KeyCode::Char('f')) {
            set_caption(screen, &format!("{} froze solid!", foe.name));
            animator.play_status_effect(foe, "freezing", true);
        }
        if input.was_pressed(KeyCode::Char('r')) {
            set_caption(screen, &format!("{} woke up!", foe.name));
            animator.play_status_effect(foe, "sleep", false);
        }
        if input.was_pressed(KeyCode::Char('h')) {
            set_caption(screen, &format!("{} ate a berry!", hero.name));
            animator.play_heal(hero, 6);
        }

        screen.borrow_mut().redraw();
        std::thread::sleep(FRAME_SLEEP);
    }
}

// ── Scene ──

fn paint_scene(screen: &Rc<RefCell<BattleScreen>>, hero: &Combatant, foe: &Combatant) {
    let mut s = screen.borrow_mut();

    s.paint_str(2, 0, "battlebeat arena", Tint::bold(Hue::White));
    s.paint_str(
        2,
        ARENA_ROWS - 1,
        "[1-5] attacks  [m]iss  [e]nemy turn  [b/f/r] status  [h]eal  [q]uit",
        Tint::plain(Hue::Grey),
    );

    for (combatant, face) in [(foe, "(o_o#)"), (hero, "(>o_o)>")] {
        if let Some(icon) = combatant.drawable_icon() {
            s.paint_box(icon, Tint::plain(Hue::Grey));
            s.paint_str(icon.x + 2, icon.mid_y(), face, Tint::plain(Hue::White));
            s.paint_str(
                icon.x + 1,
                icon.y + icon.height,
                &combatant.name,
                Tint::bold(Hue::White),
            );
        }
    }
}

fn set_caption(screen: &Rc<RefCell<BattleScreen>>, text: &str) {
    let line = format!("{text:<width$}", width = (ARENA_COLS - 4) as usize);
    screen.borrow_mut().paint_str(2, ARENA_ROWS - 3, &line, Tint::plain(Hue::SkyBlue));
}
