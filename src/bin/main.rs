// cube-os entry point
//
// Boot sequence: hardware -> refresh timer -> demo sweep -> console
//
// The periodic timer ISR owns the Refresher and repaints one level per
// tick; everything after boot is a foreground framebuffer writer. The
// console read blocks, which is fine: the ISR preempts it, so the cube
// keeps scanning while main waits for a byte.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::time::Duration;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::timer::PeriodicTimer;
use log::{info, warn};

use core::cell::RefCell;
use critical_section::Mutex;

use cube_os::apps::{demo, Console};
use cube_os::board::{Board, CubeRefresher};
use cube_os::kernel::{FRAME, LEVEL_TICK_US};

esp_bootloader_esp_idf::esp_app_desc!();

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

static REFRESHER: Mutex<RefCell<Option<CubeRefresher>>> = Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
        // Single fixed-priority interrupt, so ticks never overlap; each
        // one finishes its 16-pulse write before the next can fire.
        if let Some(refresher) = REFRESHER.borrow_ref_mut(cs).as_mut() {
            refresher.tick(&FRAME);
        }
    });
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut timer0 = PeriodicTimer::new(timg0.timer0);

    let Board { refresher, console } = Board::init(peripherals);
    info!("hardware initialized.");

    critical_section::with(|cs| {
        REFRESHER.borrow_ref_mut(cs).replace(refresher);
        timer0.set_interrupt_handler(timer0_handler);
        timer0.start(Duration::from_micros(LEVEL_TICK_US)).unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    info!("refresh running, {}us per level.", LEVEL_TICK_US);

    let mut delay = Delay::new();
    demo::lamp_test(&FRAME, &mut delay);
    demo::plane_bounce(&FRAME, &mut delay, 3);
    demo::count_up(&FRAME, &mut delay);
    info!("demo finished, entering console.");

    let mut console = Console::new(console);
    loop {
        if let Err(e) = console.run(&FRAME) {
            warn!("console error: {e:?}");
        }
    }
}
