//! CYW43439 bring-up and the self-hosted access point.
//!
//! The receiver is the network: it raises a WPA2 access point with a fixed
//! address and the transmitter joins it. There is no association logic or
//! client arbitration here; whoever sends datagrams to the command port is
//! the transmitter.
//!
//! # Wiring (on-board radio of the Pico W)
//!
//! | Function | GPIO |
//! |----------|------|
//! | WL power | 23   |
//! | WL DIO   | 24   |
//! | WL CS    | 25   |
//! | WL CLK   | 29   |

use cyw43::{Control, State};
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::{bind_interrupts, Peri};
use static_cell::StaticCell;

use crate::config::{AP_ADDRESS, WIFI_CHANNEL, WIFI_PASSWORD, WIFI_SSID};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Radio pins and DMA channel consumed by the access point.
pub struct RadioPins {
    pub pwr: Peri<'static, PIN_23>,
    pub dio: Peri<'static, PIN_24>,
    pub cs: Peri<'static, PIN_25>,
    pub clk: Peri<'static, PIN_29>,
    pub pio: Peri<'static, PIO0>,
    pub dma: Peri<'static, DMA_CH0>,
}

/// Bring up the radio, start the WPA2 access point, and return the network
/// stack handle.
///
/// Spawns the radio driver task and the network stack task; both run for
/// the life of the process. The stack is configured with the fixed
/// [`AP_ADDRESS`]/24 and no gateway.
pub async fn start_access_point(
    spawner: Spawner,
    pins: RadioPins,
) -> (Stack<'static>, Control<'static>) {
    let fw = include_bytes!("../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../cyw43-firmware/43439A0_clm.bin");

    let pwr = Output::new(pins.pwr, Level::Low);
    let cs = Output::new(pins.cs, Level::High);
    let mut pio = Pio::new(pins.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        pins.dio,
        pins.clk,
        pins.dma,
    );

    static STATE: StaticCell<State> = StaticCell::new();
    let state = STATE.init(State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.spawn(wifi_task(runner)).unwrap();

    let net_config = NetConfig::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(AP_ADDRESS.into(), 24),
        gateway: None,
        dns_servers: heapless::Vec::new(),
    });

    // The stack serves a single UDP socket on a closed network; a fixed
    // seed is enough for its local port randomization.
    let seed = 0x7ac8_1d2e_55c0_9d13;

    static RESOURCES: StaticCell<StackResources<4>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        net_config,
        RESOURCES.init(StackResources::<4>::new()),
        seed,
    );
    spawner.spawn(net_task(runner)).unwrap();

    control.init(clm).await;
    control
        .start_ap_wpa2(WIFI_SSID, WIFI_PASSWORD, WIFI_CHANNEL)
        .await;
    defmt::info!(
        "access point active: {} at {}.{}.{}.{}",
        WIFI_SSID,
        AP_ADDRESS[0],
        AP_ADDRESS[1],
        AP_ADDRESS[2],
        AP_ADDRESS[3]
    );

    (stack, control)
}

/// Radio driver task - services the CYW43439 chip.
#[embassy_executor::task]
async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Network stack task - drives embassy-net.
#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
