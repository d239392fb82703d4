use crate::controller::UploadPredictController;
use shared::PredictionResponse;

pub const REMEDIATION_STEPS: &[&str] = &[
    "Isolate the affected animal",
    "Contact a veterinarian immediately",
    "Monitor other animals for symptoms",
    "Follow biosecurity protocols to prevent spread",
];

pub const DISEASE_INFO: &str = "Lumpy Skin Disease is a viral disease that affects cattle. \
It is characterized by fever, nodules on the skin, and can lead to death in severe cases. \
Early detection is crucial for preventing spread and providing proper treatment.";

pub const PLACEHOLDER_TEXT: &str = "Upload and analyze an image to see results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    Alert,
    Normal,
}

impl DisplayVariant {
    pub fn of(prediction: &PredictionResponse) -> Self {
        if prediction.result.is_infected() {
            DisplayVariant::Alert
        } else {
            DisplayVariant::Normal
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DisplayVariant::Alert => "result-alert",
            DisplayVariant::Normal => "result-normal",
        }
    }
}

/// Probability as a whole percentage, half rounding away from zero.
pub fn confidence_percent(probability: f64) -> u32 {
    (probability.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub confidence: String,
    pub variant: DisplayVariant,
    pub remediation: &'static [&'static str],
}

impl ResultView {
    pub fn from_prediction(prediction: &PredictionResponse) -> Self {
        let variant = DisplayVariant::of(prediction);
        Self {
            label: prediction.result.to_string(),
            confidence: format!("{}%", confidence_percent(prediction.probability)),
            variant,
            remediation: match variant {
                DisplayVariant::Alert => REMEDIATION_STEPS,
                DisplayVariant::Normal => &[],
            },
        }
    }
}

/// What the results pane shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Placeholder,
    Error(String),
    Result(ResultView),
}

impl ResultPanel {
    pub fn from_controller(controller: &UploadPredictController) -> Self {
        if let Some(err) = controller.error() {
            ResultPanel::Error(err.to_string())
        } else if let Some(prediction) = controller.prediction() {
            ResultPanel::Result(ResultView::from_prediction(prediction))
        } else {
            ResultPanel::Placeholder
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl SubmitButton {
    pub fn from_controller(controller: &UploadPredictController) -> Self {
        Self {
            label: if controller.is_submitting() {
                "Processing..."
            } else {
                "Analyze Image"
            },
            enabled: controller.can_submit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::controller::BeginSubmit;
    use crate::error::PredictError;
    use crate::image::SelectedImage;

    fn prediction(body: &str) -> PredictionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn healthy_result_has_no_remediation() {
        let view = ResultView::from_prediction(&prediction(r#"{"result":"Healthy","probability":0.92}"#));
        assert_eq!(view.label, "Healthy");
        assert_eq!(view.confidence, "92%");
        assert_eq!(view.variant, DisplayVariant::Normal);
        assert!(view.remediation.is_empty());
    }

    #[test]
    fn infected_result_lists_four_actions() {
        let view = ResultView::from_prediction(&prediction(r#"{"result":"Infected","probability":0.81}"#));
        assert_eq!(view.label, "Infected");
        assert_eq!(view.confidence, "81%");
        assert_eq!(view.variant, DisplayVariant::Alert);
        assert_eq!(view.remediation.len(), 4);
        assert_eq!(view.remediation[1], "Contact a veterinarian immediately");
    }

    #[test]
    fn not_infected_is_normal() {
        let p = prediction(r#"{"result":"Not Infected","probability":0.3}"#);
        assert_eq!(DisplayVariant::of(&p), DisplayVariant::Normal);
    }

    #[test]
    fn confidence_rounds_half_up() {
        assert_eq!(confidence_percent(0.125), 13);
        assert_eq!(confidence_percent(0.994), 99);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn panel_and_button_follow_controller_state() {
        let mut controller = UploadPredictController::new(ClientConfig::default());
        assert_eq!(ResultPanel::from_controller(&controller), ResultPanel::Placeholder);
        assert!(!SubmitButton::from_controller(&controller).enabled);

        controller.select_image(SelectedImage::new("cow.png", "image/png", vec![1, 2]));
        assert!(SubmitButton::from_controller(&controller).enabled);

        let BeginSubmit::Started(pending) = controller.begin_submit() else {
            panic!("submit should start");
        };
        let button = SubmitButton::from_controller(&controller);
        assert_eq!(button.label, "Processing...");
        assert!(!button.enabled);

        controller.finish(pending, Err(PredictError::Timeout));
        assert_eq!(
            ResultPanel::from_controller(&controller),
            ResultPanel::Error(PredictError::Timeout.to_string())
        );
        assert_eq!(SubmitButton::from_controller(&controller).label, "Analyze Image");
    }
}
