//! Headless toggle demo
//!
//! Runs the ensemble through a scatter/assemble round trip at a fixed 60 Hz
//! step and prints how the transition converges. Stands in for the external
//! scheduler and renderer.

use tinsel_engine::{EnsembleConfig, EnsembleState, Mode};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    println!("Building ensemble with default configuration...");
    let mut state = match EnsembleState::new(EnsembleConfig::default()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Configuration rejected: {}", err);
            std::process::exit(1);
        }
    };

    println!(
        "[OK] {} cloud points, {} ornament groups",
        state.cloud_points().len(),
        state.ornament_groups().len()
    );
    for (i, group) in state.ornament_groups().iter().enumerate() {
        println!(
            "     group {}: '{}' ({:?}) x{}",
            i,
            group.id,
            group.kind,
            group.elements.len()
        );
    }

    // Scatter, run two seconds of frames, then reassemble
    for target in [Mode::Scattered, Mode::Assembled] {
        state.set_mode(target);
        println!("\nToggled to {:?}", target);

        for frame in 0..120 {
            state.update(FRAME_DT);
            if frame % 30 == 29 {
                let star = state
                    .ornament_groups()
                    .last()
                    .and_then(|g| g.transforms.first())
                    .map(|t| t.position)
                    .unwrap_or_default();
                println!(
                    "  t={:5.2}s progress={:.4} star at ({:6.2}, {:6.2}, {:6.2})",
                    state.elapsed(),
                    state.progress(),
                    star.x,
                    star.y,
                    star.z
                );
            }
        }
    }

    let uniforms = state.cloud_uniforms();
    println!(
        "\nFinal uniforms: progress={:.4} time={:.2}",
        uniforms.progress, uniforms.time
    );
    println!("[OK] demo complete");
}
