use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::types::*;

/// Static layout of one level plus the per-session collected flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub goal: Option<Goal>,
}

impl World {
    /// No platforms, no collectibles, no goal. Only the ground and walls apply.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in level: 800×400 px, floor at y = 400.
    pub fn default_layout() -> Self {
        let platforms = [
            Rect::new(60.0, 220.0, 90.0, 12.0),
            Rect::new(150.0, 320.0, 120.0, 12.0),
            Rect::new(320.0, 260.0, 120.0, 12.0),
            Rect::new(500.0, 200.0, 120.0, 12.0),
            Rect::new(650.0, 290.0, 110.0, 12.0),
        ]
        .into_iter()
        .map(|rect| Platform { rect })
        .collect();

        let collectibles = vec![
            Collectible::water_can(90.0, 190.0),
            Collectible::water_can(190.0, 290.0),
            Collectible::water_can(360.0, 230.0),
            Collectible::water_can(540.0, 170.0),
            Collectible::water_can(690.0, 260.0),
            Collectible::water_bottle(560.0, 110.0),
        ];

        Self {
            platforms,
            collectibles,
            goal: Some(Goal::door(Rect::new(740.0, 340.0, 40.0, 60.0))),
        }
    }

    /// Parse and validate a layout. Collected flags always start cleared.
    pub fn from_json(src: &str) -> Result<Self, LayoutError> {
        let world: Self = serde_json::from_str(src)?;
        world.validate()?;
        Ok(world)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every rectangle must be finite with non-negative size.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for p in &self.platforms {
            p.rect.check("platform")?;
        }
        for c in &self.collectibles {
            c.rect.check("collectible")?;
        }
        if let Some(goal) = &self.goal {
            goal.rect.check("goal")?;
        }
        Ok(())
    }

    /// (collected, total) over tracked collectibles.
    pub fn progress(&self) -> (usize, usize) {
        let tracked = self.collectibles.iter().filter(|c| c.tracked);
        let (mut collected, mut total) = (0, 0);
        for c in tracked {
            total += 1;
            if c.collected {
                collected += 1;
            }
        }
        (collected, total)
    }

    /// Make every collectible available again.
    pub fn restore_collectibles(&mut self) {
        for c in &mut self.collectibles {
            c.collected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let w = World::default_layout();
        assert!(w.validate().is_ok());
        assert_eq!(w.progress(), (0, 5));
        assert!(w.goal.is_some());
    }

    #[test]
    fn test_json_round_trip_drops_collected_flags() {
        let mut w = World::default_layout();
        w.collectibles[0].collected = true;
        let json = w.to_json().unwrap();
        let back = World::from_json(&json).unwrap();
        assert_eq!(back.platforms, w.platforms);
        assert_eq!(back.collectibles.len(), w.collectibles.len());
        assert!(back.collectibles.iter().all(|c| !c.collected));
        assert_eq!(back.goal, w.goal);
    }

    #[test]
    fn test_from_json_defaults() {
        let src = r#"{
            "collectibles": [
                { "rect": { "pos": [10.0, 20.0], "size": [5.0, 5.0] }, "value": 100 }
            ],
            "goal": { "rect": { "pos": [0.0, 0.0], "size": [1.0, 1.0] } }
        }"#;
        let w = World::from_json(src).unwrap();
        assert!(w.platforms.is_empty());
        assert!(w.collectibles[0].tracked);
        assert!(w.collectibles[0].message.is_none());
        assert!(w.goal.unwrap().message.contains("Everyone has water"));
    }

    #[test]
    fn test_from_json_rejects_negative_size() {
        let src = r#"{ "platforms": [ { "rect": { "pos": [0.0, 0.0], "size": [-1.0, 5.0] } } ] }"#;
        let err = World::from_json(src).unwrap_err();
        assert!(matches!(err, LayoutError::NegativeSize { what: "platform" }));
    }

    #[test]
    fn test_restore_collectibles() {
        let mut w = World::default_layout();
        for c in &mut w.collectibles {
            c.collected = true;
        }
        assert_eq!(w.progress(), (5, 5));
        w.restore_collectibles();
        assert_eq!(w.progress(), (0, 5));
    }
}
