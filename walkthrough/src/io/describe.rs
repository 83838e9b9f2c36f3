//! Mode -> descriptive-code lookup table.
//!
//! The code listing shown for the visualization step is a pure function of
//! the selected mode. All three listings are rendered once at startup from
//! embedded templates; selection afterwards is a plain lookup.

use anyhow::{Context, Result};
use minijinja::{Environment, context};

use crate::core::mode::VizMode;
use crate::io::catalog::Parameters;

const RNN_TEMPLATE: &str = include_str!("templates/viz_rnn.j2");
const LSTM_TEMPLATE: &str = include_str!("templates/viz_lstm.j2");
const COMBINED_TEMPLATE: &str = include_str!("templates/viz_combined.j2");

/// Pre-rendered descriptive code listings, one per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionTable {
    rnn: String,
    lstm: String,
    combined: String,
}

impl DescriptionTable {
    /// Render all three listings from the experiment parameters.
    pub fn render(params: &Parameters) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("rnn", RNN_TEMPLATE)
            .expect("rnn template should be valid");
        env.add_template("lstm", LSTM_TEMPLATE)
            .expect("lstm template should be valid");
        env.add_template("combined", COMBINED_TEMPLATE)
            .expect("combined template should be valid");

        let render_one = |name: &str| -> Result<String> {
            let template = env.get_template(name)?;
            let rendered = template
                .render(context! { params => params })
                .with_context(|| format!("render {name} description"))?;
            Ok(rendered)
        };

        Ok(Self {
            rnn: render_one("rnn")?,
            lstm: render_one("lstm")?,
            combined: render_one("combined")?,
        })
    }

    pub fn description(&self, mode: VizMode) -> &str {
        match mode {
            VizMode::Rnn => &self.rnn,
            VizMode::Lstm => &self.lstm,
            VizMode::Combined => &self.combined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Parameters {
        Parameters {
            vocab_size: 10_000,
            max_len: 300,
            embed_dim: 256,
            rnn_units: 256,
            lstm_units: 64,
            batch_size: 128,
            epochs: 150,
        }
    }

    #[test]
    fn render_substitutes_parameters() {
        let table = DescriptionTable::render(&params()).expect("render");
        assert!(table.description(VizMode::Lstm).contains("64 units"));
        assert!(table.description(VizMode::Rnn).contains("256 units"));
        assert!(table.description(VizMode::Combined).contains("150 epochs"));
    }

    #[test]
    fn listings_differ_per_mode() {
        let table = DescriptionTable::render(&params()).expect("render");
        assert_ne!(
            table.description(VizMode::Rnn),
            table.description(VizMode::Lstm)
        );
        assert!(
            table
                .description(VizMode::Combined)
                .contains("plot_side_by_side_epoch_metrics")
        );
        assert!(
            table
                .description(VizMode::Lstm)
                .contains("confusion_matrix(y_test, y_pred_lstm)")
        );
    }
}
