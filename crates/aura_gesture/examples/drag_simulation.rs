//! Drag Simulation Demo
//!
//! Drives a `SlideController` through a scripted pointer session and prints
//! what a host UI would observe: debounced position updates, snap
//! notifications, and the frame-by-frame momentum coast after a fling.
//!
//! Run with: cargo run -p aura_gesture --example drag_simulation

use aura_gesture::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut controller = SlideController::new(ControllerConfig::default());
    controller.set_container(ContainerGeometry::new(0.0, 0.0, 400.0, 40.0));

    controller.on_position_change(|position| println!("  position -> {position:.2}"));
    controller.on_snap_to_preset(|preset| println!("  snapped  -> {preset}"));
    controller.on_drag_start(|| println!("  drag started"));
    controller.on_drag_end(|| println!("  drag ended"));

    println!("slow drag from 20% to 70%, releasing near the 75 preset:");
    controller.pointer_down(80.0, 20.0, 0);
    controller.pointer_move(180.0, 20.0, 150);
    controller.pointer_move(280.0, 20.0, 300);
    controller.pointer_up(300);
    pump(&mut controller);

    println!("\nhard fling toward the right edge (watch the bounce):");
    controller.pointer_down(200.0, 20.0, 1000);
    controller.pointer_move(280.0, 20.0, 1006);
    controller.pointer_move(360.0, 20.0, 1012);
    controller.pointer_up(1012);
    pump(&mut controller);

    println!("\nkeyboard: Home, three ArrowRight steps, then glide to the 50% preset:");
    controller.key_input(Key::Home);
    controller.key_input(Key::ArrowRight);
    controller.key_input(Key::ArrowRight);
    controller.key_input(Key::ArrowRight);
    controller.glide_to_preset(2);
    pump(&mut controller);

    println!("\nfinal state: {:?} at {:.2}", controller.state(), controller.position());
}

/// Step 60fps frames until the controller comes to rest
fn pump(controller: &mut SlideController) {
    let mut frames = 0;
    while controller.tick(1.0 / 60.0) {
        frames += 1;
        if frames > 1000 {
            break;
        }
    }
    println!("  ({frames} frames to rest)");
}
