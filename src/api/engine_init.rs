use tracing::debug;

use crate::core::{Dataset, ZoomTransform};
use crate::error::{PlotError, PlotResult};
use crate::interaction::InteractionState;
use crate::render::{Renderer, Scene};

use super::validation::validate_config;
use super::{PlotEngine, PlotEngineConfig, PlotScales};

impl<R: Renderer> PlotEngine<R> {
    /// Creates an engine with empty data, identity zoom and default-domain
    /// scales so axes can be drawn before any dataset arrives.
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        validate_config(&config)?;
        let viewport = config.size.surface_viewport(config.margin);
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let dataset = Dataset::default();
        let base_scales = PlotScales::build(&dataset, config.size, config.scale_domain_policy)?;
        debug!(
            width = config.size.width,
            height = config.size.height,
            surface_width = viewport.width,
            surface_height = viewport.height,
            "plot engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            dataset_generation: 0,
            base_scales,
            visible_scales: base_scales,
            base_projection: Vec::new(),
            spatial_index: None,
            transform: ZoomTransform::IDENTITY,
            interaction: InteractionState::default(),
            scene: Scene::default(),
            tooltip: None,
            click_handler: None,
        })
    }
}
