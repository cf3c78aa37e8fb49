//! Drives the image rotation timer from a tokio interval.

use cs_core::{Controller, DashboardConfig, Event, RotationInterval};
use log::info;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Sign in with the first seeded account, enable rotation at `period`, then
/// apply `ticks` timer ticks. `emit` receives one line per displayed image.
pub async fn run_rotate<F>(
    config: &DashboardConfig,
    period: RotationInterval,
    ticks: u64,
    emit: F,
) -> anyhow::Result<Controller>
where
    F: FnMut(String),
{
    run_rotate_every(config, period, period.duration(), ticks, emit).await
}

pub(crate) async fn run_rotate_every<F>(
    config: &DashboardConfig,
    period: RotationInterval,
    tick_every: Duration,
    ticks: u64,
    mut emit: F,
) -> anyhow::Result<Controller>
where
    F: FnMut(String),
{
    let (username, credential) = config
        .seed_users
        .iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No seed users configured"))?;

    let mut controller = Controller::new(config);
    if let Some(notice) = controller.dispatch(Event::LoginSubmitted {
        username: username.clone(),
        password: credential.password.clone(),
    }) {
        if notice.is_error() {
            anyhow::bail!("{}", notice.message());
        }
    }
    controller.dispatch(Event::IntervalSelected { interval: period });
    controller.dispatch(Event::ToggleChanged { enabled: true });

    info!("Rotating every {} for {} ticks", period.label(), ticks);
    emit(describe(&controller));

    let mut timer = interval(tick_every);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    timer.tick().await;

    for _ in 0..ticks {
        timer.tick().await;
        controller.dispatch(Event::TimerTick);
        emit(describe(&controller));
    }

    Ok(controller)
}

fn describe(controller: &Controller) -> String {
    let image = controller.image();
    format!("[{}] {} {}", image.index, image.caption, image.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::rotation::DEFAULT_IMAGES;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn ticks_advance_counter_and_wrap_images() {
        let config = DashboardConfig::default();
        let mut lines = Vec::new();
        let start = Instant::now();

        let controller = run_rotate(&config, RotationInterval::Seconds15, 5, |l| lines.push(l))
            .await
            .unwrap();

        assert_eq!(controller.session().rotation_counter(), 5);
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            format!("[0] Live Weather Image (Update #0) {}", DEFAULT_IMAGES[0])
        );
        assert_eq!(
            lines[5],
            format!("[1] Live Weather Image (Update #5) {}", DEFAULT_IMAGES[1])
        );
        assert!(start.elapsed() >= Duration::from_secs(75));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_ticks_only_shows_first_image() {
        let config = DashboardConfig::default();
        let mut lines = Vec::new();

        let controller = run_rotate(&config, RotationInterval::Minute1, 0, |l| lines.push(l))
            .await
            .unwrap();

        assert!(controller.rotation().is_rotating());
        assert_eq!(controller.rotation().selected_interval(), RotationInterval::Minute1);
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn short_period_runs_in_real_time() {
        let config = DashboardConfig::default();
        let mut count = 0;

        let controller = run_rotate_every(
            &config,
            RotationInterval::Seconds30,
            Duration::from_millis(1),
            3,
            |_| count += 1,
        )
        .await
        .unwrap();

        assert_eq!(controller.session().rotation_counter(), 3);
        assert_eq!(count, 4);
    }
}
