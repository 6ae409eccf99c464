//! Monitor controller
//!
//! Owns the sensor, display, indicators and clock, and runs one cycle of
//! the measure/classify/indicate loop per call.

use baroguard_hal::Clock;
use baroguard_hal::ToneOutput;

use super::panel::{Indicator, IndicatorPanel};
use super::report::{CycleReport, InitError, MeasurementError};
use super::screen::{status_message, Screen};
use super::siren::Siren;
use crate::config::MonitorConfig;
use crate::state::{ErrorKind, Event, MonitorState};
use crate::traits::{
    DisplayError, DisplayExt, Led, PressureReading, PressureSensor, TextDisplay,
};

/// Pressure safety monitor
pub struct Monitor<S, D, L, T, C> {
    sensor: S,
    display: D,
    panel: IndicatorPanel<L, T>,
    clock: C,
    config: MonitorConfig,
    siren: Siren,
    screen: Screen,
    state: MonitorState,
}

impl<S, D, L, T, C> Monitor<S, D, L, T, C>
where
    S: PressureSensor,
    D: TextDisplay,
    L: Led,
    T: ToneOutput,
    C: Clock,
{
    /// Create a monitor in the `Boot` state
    pub fn new(
        sensor: S,
        display: D,
        panel: IndicatorPanel<L, T>,
        clock: C,
        config: MonitorConfig,
    ) -> Self {
        Self {
            sensor,
            display,
            panel,
            clock,
            siren: Siren::new(config.siren),
            config,
            screen: Screen::new(),
            state: MonitorState::Boot,
        }
    }

    /// Bring up outputs, display and sensor
    ///
    /// On sensor failure the status is shown on the display and the monitor
    /// halts for good: every later [`Monitor::run_cycle`] is a no-op.
    /// Display errors are not fatal; the first one is returned for logging
    /// and the display is brought up again by the next cycle that finds it
    /// uninitialized.
    pub fn init(&mut self) -> Result<Option<DisplayError>, InitError> {
        match self.state {
            MonitorState::Boot => {}
            MonitorState::Running => return Ok(None),
            MonitorState::Halted(kind) => return Err(InitError::Halted(kind)),
        }

        self.panel.all_off();
        let display_error = self.bring_up_display().err();

        match self.sensor.begin() {
            Ok(()) => {
                let status_error = self.show_status(true).err();
                self.state = self.state.transition(Event::SensorReady);
                Ok(display_error.or(status_error))
            }
            Err(e) => {
                let _ = self.show_status(false);
                self.state = self
                    .state
                    .transition(Event::InitFailed(ErrorKind::SensorNotDetected));
                Err(InitError::Sensor(e))
            }
        }
    }

    /// Run one monitor cycle
    ///
    /// Blocks for the sensor conversion plus the zone's indication time:
    /// 500 ms for Safe/Warning, the siren duration for Danger, or the retry
    /// pause after a failed measurement.
    pub fn run_cycle(&mut self) -> CycleReport {
        if !self.state.is_running() {
            return CycleReport::Inactive(self.state);
        }

        self.panel.silence();

        let reading = match self.measure() {
            Ok(reading) => reading,
            Err(e) => {
                self.clock.delay_ms(self.config.measurement.retry_delay_ms);
                self.state = self.state.transition(Event::MeasurementFailed);
                return CycleReport::MeasurementFailed(e);
            }
        };

        let zone = self.config.thresholds.classify(reading.pressure_hpa);

        self.screen.show_zone(reading.pressure_hpa, zone);
        let display_error = self.refresh_display().err();

        if zone.is_alarm() {
            self.alarm();
        } else {
            self.pulse(Indicator::for_zone(zone));
        }

        CycleReport::Measured {
            reading,
            zone,
            display_error,
        }
    }

    /// Controller power-on sequence plus backlight
    fn bring_up_display(&mut self) -> Result<(), DisplayError> {
        self.display.init()?;
        self.display.set_backlight(true)
    }

    /// Send every row of the screen
    ///
    /// Rows are re-sent each cycle even when unchanged. A display that
    /// reports it lost its setup is brought up again and redrawn once.
    fn refresh_display(&mut self) -> Result<(), DisplayError> {
        self.screen.invalidate();
        match self.screen.render(&mut self.display) {
            Err(DisplayError::NotInitialized) => {
                self.bring_up_display()?;
                self.screen.invalidate();
                self.screen.render(&mut self.display)
            }
            other => other,
        }
    }

    /// Trigger a conversion, wait for it, read the result
    fn measure(&mut self) -> Result<PressureReading, MeasurementError> {
        let wait_ms = self
            .sensor
            .start_pressure(self.config.measurement.oversampling)
            .map_err(MeasurementError::Trigger)?;

        self.clock.delay_ms(wait_ms);

        self.sensor.read_pressure().map_err(MeasurementError::Read)
    }

    /// One on/off pulse of a single LED with the speaker silent
    fn pulse(&mut self, indicator: Indicator) {
        self.panel.show_only(indicator);
        self.panel.silence();
        self.clock.delay_ms(self.config.blink.on_ms);

        self.panel.set(indicator, false);
        self.clock.delay_ms(self.config.blink.off_ms);
    }

    /// Danger indication: green and yellow off, then the blocking siren
    fn alarm(&mut self) {
        self.panel.set(Indicator::Green, false);
        self.panel.set(Indicator::Yellow, false);

        let (red, speaker) = self.panel.siren_outputs();
        self.siren
            .sound(red, speaker, &mut self.clock, self.config.siren.duration_ms);
    }

    /// Write the init status straight to the display
    ///
    /// Bypasses the screen buffer so the controller's own line wrap
    /// applies; the first cycle then overwrites whole rows.
    fn show_status(&mut self, ok: bool) -> Result<(), DisplayError> {
        let msg = status_message(S::NAME, ok);
        self.display.print_at(0, 0, &msg)
    }

    /// Current state
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Get access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get mutable access to the underlying sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the underlying display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Get access to the LEDs and speaker
    pub fn panel(&self) -> &IndicatorPanel<L, T> {
        &self.panel
    }

    /// Get access to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClock, MockDisplay, MockLed, MockSensor, MockTone};
    use crate::safety::Zone;
    use crate::traits::{Oversampling, SensorError};

    type TestMonitor = Monitor<MockSensor, MockDisplay, MockLed, MockTone, MockClock>;

    fn monitor(sensor: MockSensor) -> TestMonitor {
        let panel = IndicatorPanel::new(
            MockLed::default(),
            MockLed::default(),
            MockLed::default(),
            MockTone::default(),
        );
        Monitor::new(
            sensor,
            MockDisplay::new(),
            panel,
            MockClock::default(),
            MonitorConfig::default(),
        )
    }

    fn running(pressure_hpa: f32) -> TestMonitor {
        let mut m = monitor(MockSensor::reading(pressure_hpa));
        assert_eq!(m.init(), Ok(None));
        m
    }

    fn delays_after(m: &TestMonitor, mark: usize) -> Vec<u32> {
        m.clock().delays[mark..].to_vec()
    }

    fn tone_history(m: &TestMonitor) -> &[Option<u32>] {
        &m.panel().speaker().history
    }

    #[test]
    fn test_init_success() {
        let m = running(1000.0);

        assert_eq!(m.state(), MonitorState::Running);
        assert_eq!(m.sensor().begin_calls, 1);
        assert!(m.display().backlight);
        assert_eq!(m.display().init_calls, 1);
        assert_eq!(m.display().writes[0], "BMP180 initialized successfully!");
        assert_eq!(m.display().row(0), "BMP180 initialized s");
    }

    #[test]
    fn test_init_failure_halts_for_good() {
        let mut m = monitor(MockSensor::absent());

        assert_eq!(m.init(), Err(InitError::Sensor(SensorError::NotDetected)));
        assert_eq!(
            m.state(),
            MonitorState::Halted(ErrorKind::SensorNotDetected)
        );
        assert_eq!(m.display().writes[0], "BMP180 initialization failed!");

        let writes = m.display().writes.len();
        for _ in 0..3 {
            assert_eq!(
                m.run_cycle(),
                CycleReport::Inactive(MonitorState::Halted(ErrorKind::SensorNotDetected))
            );
        }

        // No sensor access, no display writes, no waits, LEDs dark
        assert_eq!(m.sensor().start_calls, 0);
        assert_eq!(m.display().writes.len(), writes);
        assert!(m.clock().delays.is_empty());
        assert!(!m.panel().is_on(Indicator::Red));

        // Re-running init does not retry the sensor
        assert_eq!(
            m.init(),
            Err(InitError::Halted(ErrorKind::SensorNotDetected))
        );
        assert_eq!(m.sensor().begin_calls, 1);
    }

    #[test]
    fn test_cycle_before_init_is_inactive() {
        let mut m = monitor(MockSensor::reading(1000.0));
        assert_eq!(m.run_cycle(), CycleReport::Inactive(MonitorState::Boot));
        assert_eq!(m.sensor().start_calls, 0);
    }

    #[test]
    fn test_safe_cycle() {
        let mut m = running(1013.0);

        let report = m.run_cycle();

        assert!(matches!(
            report,
            CycleReport::Measured {
                zone: Zone::Safe,
                display_error: None,
                ..
            }
        ));
        assert_eq!(
            m.sensor().last_oversampling,
            Some(Oversampling::UltraHighResolution)
        );
        // Conversion wait, then 250 on / 250 off
        assert_eq!(delays_after(&m, 0), vec![26, 250, 250]);

        let green = m.panel().led(Indicator::Green);
        assert_eq!(green.on_count, 1);
        assert!(!green.on);
        assert_eq!(m.panel().led(Indicator::Yellow).on_count, 0);
        assert_eq!(m.panel().led(Indicator::Red).on_count, 0);
        assert!(tone_history(&m).iter().all(|t| t.is_none()));

        assert_eq!(m.display().row(0), "Pressure: 1013.0 hPa");
        assert_eq!(m.display().row(1), "Safe Zone           ");
        assert_eq!(m.display().row(2), "Oxygen OK           ");
    }

    #[test]
    fn test_warning_cycle() {
        let mut m = running(650.0);

        let report = m.run_cycle();

        assert!(matches!(
            report,
            CycleReport::Measured {
                zone: Zone::Warning,
                ..
            }
        ));
        assert_eq!(delays_after(&m, 0), vec![26, 250, 250]);
        assert_eq!(m.panel().led(Indicator::Yellow).on_count, 1);
        assert!(!m.panel().is_on(Indicator::Yellow));
        assert_eq!(m.panel().led(Indicator::Green).on_count, 0);
        assert!(m.panel().speaker().is_silent());
        assert_eq!(m.display().row(1), "Warning!            ");
        assert_eq!(m.display().row(2), "Oxygen dropping     ");
    }

    #[test]
    fn test_danger_cycle_runs_siren() {
        let mut m = running(400.0);

        let report = m.run_cycle();

        assert!(matches!(
            report,
            CycleReport::Measured {
                zone: Zone::Danger,
                ..
            }
        ));

        let delays = delays_after(&m, 0);
        assert_eq!(delays[0], 26);
        assert_eq!(&delays[1..], &[100; 10]);

        assert_eq!(m.panel().led(Indicator::Red).on_count, 5);
        assert!(!m.panel().is_on(Indicator::Red));
        assert_eq!(m.panel().led(Indicator::Green).on_count, 0);
        assert!(m.panel().speaker().is_silent());
        assert_eq!(tone_history(&m).last(), Some(&None));
        assert_eq!(m.display().row(1), "Danger!             ");
        assert_eq!(m.display().row(2), "Oxygen CRITICAL     ");
    }

    #[test]
    fn test_boundary_readings() {
        let cases = [
            (750.0, Zone::Safe),
            (749.999, Zone::Warning),
            (550.0, Zone::Warning),
            (549.999, Zone::Danger),
        ];

        for (pressure, expected) in cases {
            let mut m = running(pressure);
            match m.run_cycle() {
                CycleReport::Measured { zone, .. } => assert_eq!(zone, expected),
                other => panic!("unexpected report {:?}", other),
            }
        }
    }

    #[test]
    fn test_trigger_failure_leaves_outputs_unchanged() {
        let mut m = running(650.0);
        m.run_cycle();

        let rows: Vec<String> = (0..4).map(|r| m.display().row(r).into()).collect();
        let writes = m.display().writes.len();
        let yellow_pulses = m.panel().led(Indicator::Yellow).on_count;
        let mark = m.clock().delays.len();

        m.sensor_mut().trigger_result = Err(SensorError::Bus);
        let report = m.run_cycle();

        assert_eq!(
            report,
            CycleReport::MeasurementFailed(MeasurementError::Trigger(SensorError::Bus))
        );
        assert_eq!(delays_after(&m, mark), vec![1000]);
        assert_eq!(m.sensor().read_calls, 1);
        assert_eq!(m.display().writes.len(), writes);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(m.display().row(r), row.as_str());
        }
        assert_eq!(m.panel().led(Indicator::Yellow).on_count, yellow_pulses);
        assert!(m.panel().speaker().is_silent());
        assert_eq!(m.state(), MonitorState::Running);
    }

    #[test]
    fn test_read_failure_pauses_then_retries() {
        let mut m = running(800.0);
        m.sensor_mut().read_result = Err(SensorError::NotReady);

        let report = m.run_cycle();
        assert_eq!(
            report,
            CycleReport::MeasurementFailed(MeasurementError::Read(SensorError::NotReady))
        );
        assert_eq!(report_message(&report), Some("Pressure read error."));
        // Conversion wait, then the retry pause
        assert_eq!(delays_after(&m, 0), vec![26, 1000]);
        assert_eq!(m.panel().led(Indicator::Green).on_count, 0);

        // Failures never escalate; recovery is immediate
        for _ in 0..5 {
            m.run_cycle();
        }
        m.sensor_mut().read_result = Ok(800.0);
        assert!(matches!(
            m.run_cycle(),
            CycleReport::Measured {
                zone: Zone::Safe,
                ..
            }
        ));
    }

    fn report_message(report: &CycleReport) -> Option<&'static str> {
        match report {
            CycleReport::MeasurementFailed(e) => Some(e.message()),
            _ => None,
        }
    }

    #[test]
    fn test_display_failure_is_not_fatal() {
        let mut m = running(400.0);
        m.display_mut().fail = true;

        match m.run_cycle() {
            CycleReport::Measured {
                zone,
                display_error,
                ..
            } => {
                assert_eq!(zone, Zone::Danger);
                assert_eq!(display_error, Some(DisplayError::Communication));
            }
            other => panic!("unexpected report {:?}", other),
        }
        // Siren still ran
        assert_eq!(m.panel().led(Indicator::Red).on_count, 5);
    }

    #[test]
    fn test_zone_changes_cycle_to_cycle() {
        let mut m = running(760.0);
        m.run_cycle();
        m.sensor_mut().read_result = Ok(740.0);
        m.run_cycle();
        m.sensor_mut().read_result = Ok(760.0);
        m.run_cycle();

        // No hysteresis: each boundary crossing shows immediately
        assert_eq!(m.panel().led(Indicator::Green).on_count, 2);
        assert_eq!(m.panel().led(Indicator::Yellow).on_count, 1);
        assert_eq!(m.display().row(1), "Safe Zone           ");
    }

    #[test]
    fn test_cleared_display_is_redrawn() {
        let mut m = running(800.0);
        m.run_cycle();
        m.display_mut().clear().unwrap();

        m.run_cycle();

        assert_eq!(m.display().row(0), "Pressure: 800.0 hPa ");
        assert_eq!(m.display().row(1), "Safe Zone           ");
        assert_eq!(m.display().row(2), "Oxygen OK           ");
    }

    #[test]
    fn test_display_init_glitch_recovers() {
        let mut display = MockDisplay::new();
        display.require_init = true;
        display.init_failures = 1;
        let panel = IndicatorPanel::new(
            MockLed::default(),
            MockLed::default(),
            MockLed::default(),
            MockTone::default(),
        );
        let mut m = Monitor::new(
            MockSensor::reading(650.0),
            display,
            panel,
            MockClock::default(),
            MonitorConfig::default(),
        );

        assert_eq!(m.init(), Ok(Some(DisplayError::Communication)));
        assert_eq!(m.state(), MonitorState::Running);
        assert_eq!(m.display().init_calls, 0);

        match m.run_cycle() {
            CycleReport::Measured { display_error, .. } => assert_eq!(display_error, None),
            other => panic!("unexpected report {:?}", other),
        }
        assert_eq!(m.display().init_calls, 1);
        assert!(m.display().backlight);
        assert_eq!(m.display().row(1), "Warning!            ");
    }

    #[test]
    fn test_display_that_never_comes_up() {
        let mut display = MockDisplay::new();
        display.require_init = true;
        display.init_failures = u32::MAX;
        let panel = IndicatorPanel::new(
            MockLed::default(),
            MockLed::default(),
            MockLed::default(),
            MockTone::default(),
        );
        let mut m = Monitor::new(
            MockSensor::reading(900.0),
            display,
            panel,
            MockClock::default(),
            MonitorConfig::default(),
        );
        m.init().unwrap();

        for _ in 0..3 {
            match m.run_cycle() {
                CycleReport::Measured { display_error, .. } => {
                    assert_eq!(display_error, Some(DisplayError::Communication))
                }
                other => panic!("unexpected report {:?}", other),
            }
        }
        // Indication is independent of the display
        assert_eq!(m.panel().led(Indicator::Green).on_count, 3);
    }
}
