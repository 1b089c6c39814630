use consts::{visibility, AUTOPLAY_SELECTOR, DEFAULT_PRELOAD};

#[derive(Clone, Debug, PartialEq)]
pub struct AutoplayOptions {
    pub selector: String,
    pub root_margin: String,
    pub thresholds: Vec<f64>,
    pub play_ratio: f64,
    pub default_preload: String,
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            selector: AUTOPLAY_SELECTOR.to_string(),
            root_margin: visibility::ROOT_MARGIN.to_string(),
            thresholds: visibility::THRESHOLDS.to_vec(),
            play_ratio: visibility::PLAY_RATIO,
            default_preload: DEFAULT_PRELOAD.to_string(),
        }
    }
}

impl AutoplayOptions {
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn play_ratio(mut self, play_ratio: f64) -> Self {
        self.play_ratio = play_ratio;
        self
    }

    pub fn default_preload(mut self, preload: impl Into<String>) -> Self {
        self.default_preload = preload.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let opts = AutoplayOptions::default();
        assert_eq!(opts.selector, r#"video[data-autoplay="true"]"#);
        assert_eq!(opts.root_margin, "200px 0px 200px 0px");
        assert_eq!(opts.thresholds, vec![0.0, 0.25]);
        assert_eq!(opts.play_ratio, 0.25);
        assert_eq!(opts.default_preload, "none");
    }

    #[test]
    fn builder_overrides_single_field() {
        let opts = AutoplayOptions::default().play_ratio(0.5).default_preload("metadata");
        assert_eq!(opts.play_ratio, 0.5);
        assert_eq!(opts.default_preload, "metadata");
        assert_eq!(opts.root_margin, "200px 0px 200px 0px");
    }
}
