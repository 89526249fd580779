#![no_std]
#![no_main]

use defmt::{debug, error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::Stack;
use embassy_rp::pwm::Pwm;
use embassy_time::Instant;
use udp_to_servo_rp2040::config::{POLL_INTERVAL, UDP_PORT};
use udp_to_servo_rp2040::{
    servo_pwm_config, start_access_point, ControlBridge, PwmActuatorSink, RadioPins, StepEvent,
    UdpCommandSource,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("udp-to-servo starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- PWM setup ---
    // Slice 0 drives roll/pitch on GPIO 0/1, slice 1 drives yaw/ESC on
    // GPIO 2/3. No pulses are emitted until the bridge applies its startup
    // posture.
    let roll_pitch = Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_0, p.PIN_1, servo_pwm_config());
    let yaw_throttle = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, servo_pwm_config());
    let sink = PwmActuatorSink::new(roll_pitch, yaw_throttle);

    // --- Wi-Fi access point ---
    let pins = RadioPins {
        pwr: p.PIN_23,
        dio: p.PIN_24,
        cs: p.PIN_25,
        clk: p.PIN_29,
        pio: p.PIO0,
        dma: p.DMA_CH0,
    };
    let (stack, _control) = start_access_point(spawner, pins).await;

    spawner.spawn(control_task(stack, sink)).unwrap();
    info!("udp-to-servo initialized, waiting for commands...");
}

/// Control task - owns the bridge and with it all actuator and liveness
/// state. One cycle per poll window, one datagram per cycle, liveness
/// check every cycle.
#[embassy_executor::task]
async fn control_task(stack: Stack<'static>, sink: PwmActuatorSink<'static>) -> ! {
    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; 512];
    let mut tx_meta = [PacketMetadata::EMPTY; 2];
    let mut tx_buffer = [0u8; 32];
    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(UDP_PORT).unwrap();
    info!("UDP command socket listening on port {}", UDP_PORT);

    let mut bridge = ControlBridge::new(UdpCommandSource::new(socket, POLL_INTERVAL), sink);
    bridge.startup();
    info!("fail-safe posture applied, control loop running");

    let epoch = Instant::now();
    loop {
        let now =
            core::time::Duration::from_micros(Instant::now().duration_since(epoch).as_micros());
        match bridge.step(now).await {
            Ok(StepEvent::Command(pulses)) => {
                debug!(
                    "controls: roll {}us pitch {}us yaw {}us esc {}us",
                    pulses.roll_servo, pulses.pitch_servo, pulses.yaw_servo, pulses.throttle_esc
                );
            }
            Ok(StepEvent::Idle) => {}
            Ok(StepEvent::Dropped(e)) => warn!("datagram dropped: {}", e),
            Ok(StepEvent::Failsafe) => warn!("command link lost, fail-safe engaged"),
            Err(e) => error!("receive fault: {}", e),
        }
    }
}
