use crate::config::Parameters;

/// What the host looked like at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostProfile {
    pub touch_primary: bool,
    pub viewport_width: f32,
}

impl HostProfile {
    pub fn from_parameters(parameters: &Parameters) -> Self {
        Self {
            touch_primary: parameters.touch_primary,
            viewport_width: parameters.window_width as f32,
        }
    }

    /// Whether the particle backdrop may run at all. Decided once; resizing later does not change it.
    pub fn permits_backdrop(&self, min_viewport_width: f32) -> bool {
        !self.touch_primary && self.viewport_width >= min_viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(touch_primary: bool, viewport_width: f32) -> HostProfile {
        HostProfile {
            touch_primary,
            viewport_width,
        }
    }

    #[test]
    fn desktop_wide_viewport_is_permitted() {
        assert!(host(false, 768.0).permits_backdrop(768.0));
        assert!(host(false, 1920.0).permits_backdrop(768.0));
    }

    #[test]
    fn touch_hosts_are_refused_regardless_of_width() {
        assert!(!host(true, 1920.0).permits_backdrop(768.0));
    }

    #[test]
    fn narrow_viewports_are_refused() {
        assert!(!host(false, 767.0).permits_backdrop(768.0));
        assert!(!host(false, 0.0).permits_backdrop(768.0));
    }

    #[test]
    fn profile_reads_startup_parameters() {
        let parameters = Parameters {
            touch_primary: true,
            window_width: 640,
            ..Parameters::default()
        };
        assert_eq!(
            HostProfile::from_parameters(&parameters),
            host(true, 640.0)
        );
    }
}
