use platcore::*;

const LAYOUT: &str = r#"{
    "platforms": [
        { "rect": { "pos": [0.0, 300.0], "size": [200.0, 10.0] } }
    ],
    "collectibles": [
        { "rect": { "pos": [55.0, 200.0], "size": [20.0, 24.0] }, "value": 100 }
    ]
}"#;

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    let cfg = PhysicsConfig::from_json(r#"{ "gravity": 0.5 }"#)?;
    let world = World::from_json(LAYOUT)?;
    let mut session = Session::new(cfg, world);

    for frame in 0..120 {
        let events = session.tick(Intents::default());
        if !events.is_empty() {
            println!("[{frame}] {events:?}");
        }
        if session.body().grounded {
            println!("[{frame}] landed at y={}", session.body().pos.y);
            break;
        }
    }

    println!("{}", session.snapshot().to_json()?);
    Ok(())
}
