// WebAssembly bindings for the calculator
use crate::calc::{CalcMode, Layout, OutputUnits, VelocityMode};
use crate::config::CalculatorConfig;
use crate::parser;
use crate::units;
use wasm_bindgen::prelude::*;

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

#[wasm_bindgen]
pub struct CalculatorWasm {
    config: CalculatorConfig,
}

impl Default for CalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Replace the selections with a TOML document
    #[wasm_bindgen]
    pub fn load_config(&mut self, content: &str) -> Result<(), JsValue> {
        self.config = CalculatorConfig::load_from_str(content)
            .map_err(|e| js_error(format!("Failed to load config: {}", e)))?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_modes(&mut self, calc_mode: &str, velocity_mode: &str) -> Result<(), JsValue> {
        self.config = self
            .config
            .with_modes(Some(calc_mode), Some(velocity_mode))
            .map_err(|e| js_error(e.to_string()))?;
        Ok(())
    }

    /// Set output units from a JSON object such as `{"distance": "mile", "speed": "mph"}`.
    /// Missing keys fall back to the defaults.
    #[wasm_bindgen]
    pub fn set_units(&mut self, units_json: &str) -> Result<(), JsValue> {
        let units: OutputUnits = serde_json::from_str(units_json)
            .map_err(|e| js_error(format!("Failed to parse units JSON: {}", e)))?;
        self.config.units = units;
        Ok(())
    }

    /// Derive the read-only field with the current selections.
    /// Returns JSON of the three display strings, the derived field and the SI base values.
    #[wasm_bindgen]
    pub fn derive(
        &self,
        distance: Option<String>,
        time: Option<String>,
        velocity: Option<String>,
    ) -> Result<String, JsValue> {
        let derivation =
            self.config
                .derive(distance.as_deref(), time.as_deref(), velocity.as_deref());

        serde_json::to_string(&derivation)
            .map_err(|e| js_error(format!("Failed to serialize result: {}", e)))
    }

    /// Field order, operator and read-only field for a mode pair, as JSON
    #[wasm_bindgen]
    pub fn layout(&self, calc_mode: &str, velocity_mode: &str) -> Result<String, JsValue> {
        let calc_mode: CalcMode = calc_mode.parse().map_err(|e| js_error(format!("{}", e)))?;
        let velocity_mode: VelocityMode = velocity_mode
            .parse()
            .map_err(|e| js_error(format!("{}", e)))?;

        serde_json::to_string(&Layout::for_modes(calc_mode, velocity_mode))
            .map_err(|e| js_error(format!("Failed to serialize layout: {}", e)))
    }

    /// Seconds, or undefined
    #[wasm_bindgen]
    pub fn parse_duration(&self, text: &str) -> Option<f64> {
        parser::parse_duration(text).map(|q| q.magnitude())
    }

    /// Meters, or undefined
    #[wasm_bindgen]
    pub fn parse_distance(&self, text: &str) -> Option<f64> {
        parser::parse_distance(text).map(|q| q.magnitude())
    }

    /// Meters per second, or undefined
    #[wasm_bindgen]
    pub fn parse_speed(&self, text: &str) -> Option<f64> {
        parser::parse_speed(text).map(|q| q.magnitude())
    }

    /// Seconds per meter, or undefined
    #[wasm_bindgen]
    pub fn parse_pace(&self, text: &str) -> Option<f64> {
        parser::parse_pace(text).map(|q| q.magnitude())
    }

    #[wasm_bindgen]
    pub fn format_hmmss(&self, seconds: f64) -> String {
        units::format_hmmss(seconds)
    }
}
