//! Device coordinator façade

use heapless::Vec;

use super::diagnostics::{AreaStatus, ButtonStatus, Diagnostics};
use super::status::{format_log, Readings, StatusMessage};
use crate::backlight::BacklightController;
use crate::config::PanelConfig;
use crate::error::{Capability, Error};
use crate::panel::Panel;
use crate::registry::{AreaId, ButtonId, ViewId};
use crate::state::{Transition, UiState};
use crate::touch::TouchDispatcher;
use crate::traits::{
    Board, FeedId, FeedUploader, LightSource, Peripherals, SensorError, SensorKind, SoundCue,
    SoundSink, TemperatureSensor, TextRenderer, TouchSource,
};

pub const DEVICE_NAME: &str = "f451 IoT Logger";

/// Which sensors the application has switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorFlags {
    pub temperature: bool,
    pub light: bool,
}

impl Default for SensorFlags {
    fn default() -> Self {
        Self {
            temperature: true,
            light: true,
        }
    }
}

/// Owns the panel and the board peripherals
///
/// Single-threaded: every call runs to completion before returning. Hosts
/// with several threads must put the coordinator behind one lock.
pub struct DeviceCoordinator<B: Board> {
    config: PanelConfig,
    panel: Panel,
    touch: TouchDispatcher,
    backlight: BacklightController,
    peripherals: Peripherals<B>,
    sensors: SensorFlags,
}

impl<B: Board> DeviceCoordinator<B> {
    /// Build the panel, apply the startup backlight and mount the first view
    pub fn new(config: PanelConfig, mut peripherals: Peripherals<B>) -> Result<Self, Error> {
        let panel = Panel::new(&config)?;
        let mut backlight = BacklightController::new(config.backlight)?;
        backlight.init(config.startup_backlight(), &mut peripherals.brightness);

        for capability in Capability::ALL {
            if !peripherals.has(capability) {
                log::warn!("{} unavailable", capability.name());
            }
        }

        let mut coordinator = Self {
            touch: TouchDispatcher::new(config.touch),
            config,
            panel,
            backlight,
            peripherals,
            sensors: SensorFlags::default(),
        };
        coordinator.panel.mount(&mut coordinator.peripherals.surface)?;
        coordinator.render_area(AreaId::LOG)?;
        log::info!(
            "{} ready on {}",
            DEVICE_NAME,
            coordinator.config.board.name()
        );
        Ok(coordinator)
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn state(&self) -> &UiState {
        self.panel.state()
    }

    pub fn peripherals(&self) -> &Peripherals<B> {
        &self.peripherals
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<B> {
        &mut self.peripherals
    }

    /// Replace the log text, wrapping it for display
    pub fn update_log(&mut self, text: &str) -> Result<(), Error> {
        if self.panel.set_area_text(AreaId::LOG, text)? {
            self.render_area(AreaId::LOG)?;
        }
        Ok(())
    }

    pub fn update_status(&mut self, text: &str) -> Result<(), Error> {
        self.panel.set_area_text(AreaId::STATUS, text)?;
        Ok(())
    }

    /// Show one of the catalog status messages
    pub fn show_status(&mut self, message: StatusMessage) -> Result<(), Error> {
        self.update_status(message.text())
    }

    /// Show a countdown value as two right-aligned digits
    pub fn update_counter(&mut self, value: i32) -> Result<(), Error> {
        self.panel
            .apply(Transition::TickCounter(value), &mut self.peripherals.surface)
    }

    pub fn select_view(&mut self, view: ViewId) -> Result<(), Error> {
        self.panel
            .apply(Transition::SwitchView(view), &mut self.peripherals.surface)
    }

    /// Enable or disable a text area
    pub fn set_area_enabled(&mut self, id: AreaId, enabled: bool) -> Result<(), Error> {
        self.panel.set_area_enabled(id, enabled)
    }

    /// One loop iteration: touch dispatch, then backlight
    ///
    /// Returns the button activated on this tick.
    pub fn tick(&mut self) -> Option<ButtonId> {
        let sample = self.peripherals.touch.sample();
        let activated = self.touch.handle(
            sample,
            &mut self.panel,
            &mut self.peripherals.surface,
            &mut self.peripherals.sound,
        );
        if let Some(light) = self.peripherals.light.as_mut() {
            let level = light.sample();
            self.backlight
                .apply(level, &mut self.peripherals.brightness);
        }
        activated
    }

    /// Override the backlight until the next light reading
    pub fn set_backlight(&mut self, level: f32) -> f32 {
        self.backlight
            .set_manual(level, &mut self.peripherals.brightness)
    }

    pub fn brightness(&self) -> f32 {
        self.backlight.current()
    }

    pub fn play(&mut self, cue: SoundCue) -> Result<(), Error> {
        self.peripherals
            .sound
            .play(cue)
            .map_err(|_| Error::CapabilityUnavailable(Capability::Sound))
    }

    pub fn set_sensor_enabled(&mut self, sensor: SensorKind, enabled: bool) {
        log::info!(
            "{} sensor {}",
            sensor.name(),
            if enabled { "enabled" } else { "disabled" }
        );
        match sensor {
            SensorKind::Temperature => self.sensors.temperature = enabled,
            SensorKind::Light => self.sensors.light = enabled,
        }
    }

    pub fn sensors(&self) -> SensorFlags {
        self.sensors
    }

    /// Temperature in degrees Celsius
    pub fn read_temperature(&mut self) -> Result<f32, Error> {
        if !self.sensors.temperature {
            return Err(SensorError::Disabled.into());
        }
        let sensor = self
            .peripherals
            .temperature
            .as_mut()
            .ok_or(Error::CapabilityUnavailable(Capability::Temperature))?;
        Ok(sensor.read_celsius()?)
    }

    pub fn read_light(&mut self) -> Result<u16, Error> {
        if !self.sensors.light {
            return Err(SensorError::Disabled.into());
        }
        let sensor = self
            .peripherals
            .light
            .as_mut()
            .ok_or(Error::CapabilityUnavailable(Capability::Light))?;
        Ok(sensor.sample())
    }

    /// Read both sensors and push the readings into the log area
    ///
    /// A sensor that is disabled, missing or failing is shown as `--`.
    pub fn refresh_sensors(&mut self) -> Result<Readings, Error> {
        let readings = Readings {
            celsius: self
                .read_temperature()
                .map_err(|e| log::debug!("temperature skipped: {}", e))
                .ok(),
            light: self
                .read_light()
                .map_err(|e| log::debug!("light skipped: {}", e))
                .ok(),
        };
        let text = format_log(&readings, self.config.temperature_unit);
        self.update_log(&text)?;
        Ok(readings)
    }

    /// Publish readings to the feeds, reporting progress on the status line
    pub fn upload_readings(&mut self, readings: &Readings) -> Result<(), Error> {
        self.show_status(StatusMessage::Connect)?;
        if self.peripherals.uploader.is_none() {
            self.show_status(StatusMessage::Error)?;
            return Err(Error::CapabilityUnavailable(Capability::Uploader));
        }

        self.show_status(StatusMessage::Upload)?;
        let mut result = Ok(());
        if let Some(uploader) = self.peripherals.uploader.as_mut() {
            if let Some(celsius) = readings.celsius {
                result = uploader.publish(FeedId::Temperature, celsius);
            }
            if let (Ok(()), Some(light)) = (result, readings.light) {
                result = uploader.publish(FeedId::Light, f32::from(light));
            }
        }

        if let Err(e) = result {
            log::warn!("upload failed: {:?}", e);
            self.show_status(StatusMessage::Error)?;
            return Err(e.into());
        }
        self.show_status(StatusMessage::Disconnect)?;
        self.show_status(StatusMessage::Wait)
    }

    /// Load the upload interval into the counter
    pub fn start_countdown(&mut self) -> Result<(), Error> {
        self.update_counter(i32::from(self.config.upload_interval_s))
    }

    /// Count down one second
    ///
    /// Returns `true` once the counter reaches zero and the next upload is
    /// due. Holds while logging is paused.
    pub fn countdown_step(&mut self) -> Result<bool, Error> {
        let state = *self.panel.state();
        if state.is_paused() {
            return Ok(false);
        }
        match state.countdown {
            0 => Ok(true),
            n => {
                self.update_counter(i32::from(n) - 1)?;
                Ok(n == 1)
            }
        }
    }

    /// Snapshot for external logging. Never fails.
    pub fn self_test(&self) -> Diagnostics {
        let panel = &self.panel;

        let mut views = Vec::new();
        for view in panel.views().iter() {
            let _ = views.push(view.id());
        }

        let mut buttons = Vec::new();
        for button in panel.buttons().iter() {
            let _ = buttons.push(ButtonStatus {
                id: button.id(),
                label: button.label().try_into().unwrap_or_default(),
                selected: button.is_selected(),
            });
        }

        let mut areas = Vec::new();
        for area in panel.areas().iter() {
            let _ = areas.push(AreaStatus {
                id: area.id(),
                enabled: area.is_enabled(),
                text: area.text().try_into().unwrap_or_default(),
            });
        }

        let mut capabilities = Vec::new();
        for capability in Capability::ALL {
            let _ = capabilities.push((capability, self.peripherals.has(capability)));
        }

        let diagnostics = Diagnostics {
            device_name: DEVICE_NAME,
            nickname: self.config.nickname.clone(),
            board: self.config.board,
            screen: panel.screen(),
            rotation: self.config.rotation,
            brightness: self.backlight.current(),
            state: *panel.state(),
            mounted_view: panel.views().mounted(),
            views,
            buttons,
            areas,
            capabilities,
            sensors: self.sensors,
        };
        log::debug!("self test: view {}", diagnostics.active_view());
        diagnostics
    }

    /// Wrap an area's text with the renderer, if one is fitted
    fn render_area(&mut self, id: AreaId) -> Result<(), Error> {
        let Some(renderer) = self.peripherals.text.as_ref() else {
            return Ok(());
        };
        let area = self.panel.areas().get(id)?;
        let Some(width) = area.wrap_width() else {
            return Ok(());
        };
        let lines = renderer.wrap(area.text(), usize::from(width));
        self.panel.set_area_lines(id, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{full_peripherals, init_logging, MockBoard};
    use crate::traits::{TouchSample, UploadError};

    fn coordinator() -> DeviceCoordinator<MockBoard> {
        init_logging();
        DeviceCoordinator::new(PanelConfig::default(), full_peripherals()).unwrap()
    }

    fn log_text(c: &DeviceCoordinator<MockBoard>) -> &str {
        c.panel().areas().get(AreaId::LOG).unwrap().text()
    }

    fn status_text(c: &DeviceCoordinator<MockBoard>) -> &str {
        c.panel().areas().get(AreaId::STATUS).unwrap().text()
    }

    #[test]
    fn test_init_mounts_splash_and_sets_backlight() {
        let c = coordinator();
        let p = c.peripherals();
        assert_eq!(p.surface.as_ref().unwrap().shown, vec![ViewId::SPLASH]);
        assert_eq!(p.brightness.as_ref().unwrap().writes, vec![0.5]);
        assert_eq!(c.brightness(), 0.5);
    }

    #[test]
    fn test_init_without_peripherals() {
        init_logging();
        let mut c =
            DeviceCoordinator::<MockBoard>::new(PanelConfig::default(), Peripherals::default())
                .unwrap();
        assert_eq!(c.tick(), None);
        c.update_log("still works").unwrap();
        assert_eq!(
            c.play(SoundCue::Demo),
            Err(Error::CapabilityUnavailable(Capability::Sound))
        );
        let diag = c.self_test();
        assert!(Capability::ALL.iter().all(|cap| !diag.has(*cap)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = PanelConfig::default();
        config.icons.clear();
        assert!(matches!(
            DeviceCoordinator::new(config, full_peripherals()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_update_log_truncates_and_wraps() {
        let mut c = coordinator();
        let long = "y".repeat(100);
        c.update_log(&long).unwrap();
        assert_eq!(log_text(&c), &long[..90]);
        let lines = c.panel().areas().get(AreaId::LOG).unwrap().lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 30));
    }

    #[test]
    fn test_update_status_cap() {
        let mut c = coordinator();
        c.update_status("0123456789012345678901234567890123456789").unwrap();
        assert_eq!(status_text(&c), "012345678901234567890123456789");
    }

    #[test]
    fn test_update_counter() {
        let mut c = coordinator();
        c.update_counter(5).unwrap();
        assert_eq!(c.panel().areas().get(AreaId::COUNTER).unwrap().text(), " 5");
        c.update_counter(-3).unwrap();
        assert_eq!(c.state().countdown, 0);
    }

    #[test]
    fn test_disabled_area_ignores_updates() {
        let mut c = coordinator();
        c.set_area_enabled(AreaId::STATUS, false).unwrap();
        c.show_status(StatusMessage::Connect).unwrap();
        assert_eq!(status_text(&c), "Processing ...");
        let diag = c.self_test();
        assert!(!diag.area(AreaId::STATUS).unwrap().enabled);
    }

    #[test]
    fn test_tick_dispatches_touch_and_backlight() {
        let mut c = coordinator();
        {
            let p = c.peripherals_mut();
            p.touch
                .as_mut()
                .unwrap()
                .samples
                .extend([TouchSample::at(270, 110), TouchSample::at(270, 110)]);
            p.light.as_mut().unwrap().level = 500;
        }
        assert_eq!(c.tick(), Some(ButtonId::MODE));
        assert_eq!(c.tick(), None);
        assert!(c.state().is_paused());
        assert_eq!(c.brightness(), 0.2);
        let p = c.peripherals();
        assert_eq!(p.brightness.as_ref().unwrap().writes, vec![0.5, 0.2]);
        assert_eq!(p.sound.as_ref().unwrap().played, vec![SoundCue::Tab]);
    }

    #[test]
    fn test_refresh_sensors_formats_log() {
        let mut c = coordinator();
        let readings = c.refresh_sensors().unwrap();
        assert_eq!(readings.celsius, Some(21.5));
        assert_eq!(readings.light, Some(10_000));
        assert_eq!(log_text(&c), "Temperature: 21.50°C\nLight data:  10,000 lum");
    }

    #[test]
    fn test_disabled_sensor_reports_placeholder() {
        let mut c = coordinator();
        c.set_sensor_enabled(SensorKind::Light, false);
        assert_eq!(
            c.read_light(),
            Err(Error::Sensor(SensorError::Disabled))
        );
        let readings = c.refresh_sensors().unwrap();
        assert_eq!(readings.light, None);
        assert!(log_text(&c).ends_with("Light data:  --"));
    }

    #[test]
    fn test_failing_temperature_sensor() {
        let mut c = coordinator();
        c.peripherals_mut().temperature.as_mut().unwrap().reading =
            Err(SensorError::NotResponding);
        assert_eq!(
            c.read_temperature(),
            Err(Error::Sensor(SensorError::NotResponding))
        );
        assert_eq!(c.refresh_sensors().unwrap().celsius, None);
    }

    #[test]
    fn test_upload_readings() {
        let mut c = coordinator();
        let readings = c.refresh_sensors().unwrap();
        c.upload_readings(&readings).unwrap();
        assert_eq!(status_text(&c), "Waiting ...");
        assert_eq!(
            c.peripherals().uploader.as_ref().unwrap().published,
            vec![(FeedId::Temperature, 21.5), (FeedId::Light, 10_000.0)]
        );
    }

    #[test]
    fn test_upload_failure_shows_error() {
        let mut c = coordinator();
        c.peripherals_mut().uploader.as_mut().unwrap().offline = true;
        let readings = c.refresh_sensors().unwrap();
        assert_eq!(
            c.upload_readings(&readings),
            Err(Error::Upload(UploadError::NotConnected))
        );
        assert_eq!(status_text(&c), "- ERROR -");
    }

    #[test]
    fn test_upload_without_uploader() {
        let mut c = coordinator();
        c.peripherals_mut().uploader = None;
        let readings = Readings {
            celsius: Some(20.0),
            light: None,
        };
        assert_eq!(
            c.upload_readings(&readings),
            Err(Error::CapabilityUnavailable(Capability::Uploader))
        );
        assert_eq!(status_text(&c), "- ERROR -");
    }

    #[test]
    fn test_countdown_runs_to_due() {
        let mut c = coordinator();
        c.start_countdown().unwrap();
        assert_eq!(c.state().countdown, 30);
        let mut steps = 0;
        while !c.countdown_step().unwrap() {
            steps += 1;
        }
        assert_eq!(steps, 29);
        assert_eq!(c.panel().areas().get(AreaId::COUNTER).unwrap().text(), " 0");
        assert!(c.countdown_step().unwrap());
    }

    #[test]
    fn test_countdown_holds_while_paused() {
        let mut c = coordinator();
        c.start_countdown().unwrap();
        c.peripherals_mut()
            .touch
            .as_mut()
            .unwrap()
            .samples
            .push_back(TouchSample::at(270, 110));
        c.tick();
        assert!(c.state().is_paused());
        assert!(!c.countdown_step().unwrap());
        assert_eq!(c.state().countdown, 30);
    }

    #[test]
    fn test_self_test_snapshot() {
        let mut c = coordinator();
        c.select_view(ViewId::LOG).unwrap();
        let diag = c.self_test();
        assert_eq!(diag.active_view(), ViewId::LOG);
        assert_eq!(diag.mounted_view, Some(ViewId::LOG));
        assert_eq!(diag.views.len(), 3);
        assert_eq!(diag.button(ButtonId::MODE).unwrap().label.as_str(), "PAUSE");
        assert!(diag.has(Capability::Uploader));
        assert_eq!(diag.brightness, 0.5);

        let report = diag.to_string();
        assert!(report.starts_with("Device Name:    f451 IoT Logger\n"));
        assert!(report.contains("Display Dims:   320px(W) x 240px(H)"));
        assert!(report.contains("   - log *"));
    }

    #[test]
    fn test_manual_backlight() {
        let mut c = coordinator();
        assert_eq!(c.set_backlight(2.0), 1.0);
        assert_eq!(c.brightness(), 1.0);
    }
}
