//! Astrogun binary: start-up, the two screens, teardown

use astro_engine::assets::ModelCatalog;
use astro_engine::audio::{backend, SoundManager};
use astro_engine::core::config::InputConfig;
use astro_engine::foundation::logging;
use astro_engine::foundation::time::{Clock, Stopwatch, SystemClock};
use astro_engine::input::{DigitalInput, IdlePins, KeySource, NoKeys, PinDirection, SysfsGpio, TerminalKeys};
use astro_engine::render::HeadlessRenderer;
use astro_engine::sensor::{self, FusionReader};
use astrogun::devices::Devices;
use astrogun::opening::OpeningScreen;
use astrogun::{GameConfig, GameContext, GameError, GameLevel};

fn main() {
    if let Err(e) = run() {
        log::error!("Astrogun failed: {}", e);
        eprintln!("astrogun: {}", e);
        std::process::exit(1);
    }
}

fn setup_gpio(input: &InputConfig) -> Result<SysfsGpio, GameError> {
    let mut gpio = SysfsGpio::new(&input.gpio_root);
    gpio.setup(input.start_pin, PinDirection::In)?;
    gpio.setup(input.fire_pin, PinDirection::In)?;
    gpio.setup(input.fire_lamp_pin, PinDirection::Out)?;
    gpio.set(input.fire_lamp_pin, 0)?;
    gpio.setup(input.rumble_pin, PinDirection::Out)?;
    Ok(gpio)
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load()?;
    logging::init(&config.engine.logging.level);
    log::info!("Starting Astrogun");

    let mut renderer = HeadlessRenderer::new(&config.engine.display);

    let stopwatch = Stopwatch::start_new();
    let assets = &config.engine.assets;
    let catalog = ModelCatalog::load_or_build(&config.models, &assets.models_dir, &assets.cache_path())?;
    log::info!("Loading time: {:.3}s", stopwatch.elapsed_secs());

    let context = GameContext::new(config, catalog)?;
    let config = context.config();

    let sounds = if config.engine.audio.enabled {
        SoundManager::load_bank(
            &config.engine.audio.sounds_dir,
            config.sounds.iter().map(|(id, file)| (id.as_str(), file.as_str())),
        )?
    } else {
        SoundManager::new()
    };
    let mut audio = backend::create_output(&config.engine.audio, sounds)?;

    let input = &config.engine.input;
    let mut pins: Box<dyn DigitalInput> = if input.use_gpio {
        Box::new(setup_gpio(input)?)
    } else {
        Box::new(IdlePins)
    };

    let mut reader = FusionReader::start(sensor::open_device(&config.engine.sensor))?;

    let mut keys: Box<dyn KeySource> = if input.use_keyboard {
        match TerminalKeys::open() {
            Ok(keys) => Box::new(keys),
            Err(e) => {
                log::warn!("{}; playing without keyboard", e);
                Box::new(NoKeys)
            }
        }
    } else {
        Box::new(NoKeys)
    };

    let clock = SystemClock::new();
    let mut devices = Devices {
        renderer: &mut renderer,
        keys: keys.as_mut(),
        pins: pins.as_mut(),
        audio: audio.as_mut(),
        sensor: &mut reader,
    };

    let started = match OpeningScreen::new(input.start_pin).show(&clock, &mut devices) {
        Ok(started) => started,
        Err(e) => {
            devices.teardown();
            return Err(e);
        }
    };
    if !started {
        log::info!("Display closed before the round started");
        devices.teardown();
        return Ok(());
    }

    let mut level = GameLevel::new(&context, clock.now());
    let summary = level.play(&clock, &mut devices)?;
    println!(
        "Score {:03} in {} frames ({:.1} fps)",
        summary.score, summary.frames, summary.average_fps
    );
    Ok(())
}
