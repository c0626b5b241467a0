pub mod jitter;
pub mod placement;
pub mod wardrobe;

use anyhow::Result;
use jitter::JitterFilter;
use log::info;
use placement::PlacementCalculator;
use wardrobe::Wardrobe;

use crate::config::HangerConfig;

pub struct Systems {
    pub placement_calculator: PlacementCalculator,
    pub jitter_filter: JitterFilter,
    pub wardrobe: Wardrobe,
}

impl Systems {
    pub fn new(config: &HangerConfig, shirt_names: Vec<String>) -> Result<Systems> {
        let placement_calculator = PlacementCalculator::new(config.placement_settings());
        let jitter_filter = JitterFilter::new(config.jitter_threshold);
        let wardrobe = Wardrobe::new(shirt_names)?;
        info!(
            "Wardrobe has {} shirts; starting with \"{}\"",
            wardrobe.len(),
            wardrobe.current_name()
        );

        Ok(Systems {
            placement_calculator,
            jitter_filter,
            wardrobe,
        })
    }
}
