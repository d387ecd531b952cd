use log::info;
use platcore::*;

fn main() {
    env_logger::init();

    let mut session = Session::new(PhysicsConfig::default(), World::default_layout());
    let mut input = InputState::new();

    // Scripted key presses: (frame, code, down)
    let script: &[(u32, &str, bool)] = &[
        (30, "ArrowRight", true),
        (70, "Space", true),
        (72, "Space", false),
        (140, "Space", true),
        (142, "Space", false),
        (260, "KeyW", true),
        (262, "KeyW", false),
        (400, "ArrowRight", false),
    ];

    for frame in 0..600u32 {
        for &(at, code, down) in script {
            if at == frame {
                if down {
                    input.key_down(code);
                } else {
                    input.key_up(code);
                }
            }
        }

        for ev in session.tick(input.sample()) {
            match ev {
                Event::SessionStarted => println!("[{frame}] started"),
                Event::ItemCollected { message, collected, total, .. } => {
                    println!("[{frame}] {message} ({collected}/{total})")
                }
                Event::GoalReached { message, .. } => println!("[{frame}] {message}"),
                Event::SessionReset => println!("[{frame}] reset"),
            }
        }
        session.advance_clock(1.0 / 60.0);
    }

    let snap = session.snapshot();
    info!("final frame {}", snap.frame);
    println!(
        "{} | {} | progress {:.0}% | player ({:.1}, {:.1})",
        hud::score_text(snap.score),
        hud::timer_text(snap.elapsed),
        snap.progress,
        snap.player.x,
        snap.player.y
    );
}
