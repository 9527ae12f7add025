// demos/error_handling_demo.rs
use cabin_sway::error::FdError;
use cabin_sway::forcing::{WindComponents, WindParams};
use cabin_sway::sim::{simulate_sway, SwayConfig};

fn main() {
    println!("Error Handling Demo for cabin-sway");
    println!("==================================\n");

    // Test 1: Negative stiffness
    println!("1. Testing negative stiffness coefficient...");

    let negative_alpha = SwayConfig {
        alpha: -9.81 / 8.0,
        ..Default::default()
    };

    match simulate_sway(&negative_alpha) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Degenerate grid
    println!("\n2. Testing a one-sample grid...");

    let one_sample = SwayConfig {
        steps: 1,
        ..Default::default()
    };

    match simulate_sway(&one_sample) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Grid too coarse for the explicit scheme
    println!("\n3. Testing an unstable grid (ε√α ≥ 2)...");

    let coarse = SwayConfig {
        alpha: 100.0,
        t_end: 300.0,
        steps: 100, // ε = 3, ε√α = 30
        ..Default::default()
    };

    match simulate_sway(&coarse) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Non-finite seed
    println!("\n4. Testing a NaN initial condition...");

    let nan_seed = SwayConfig {
        theta1: f64::NAN,
        ..Default::default()
    };

    match simulate_sway(&nan_seed) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Zero gust width
    println!("\n5. Testing a zero gust width...");

    let zero_width = SwayConfig {
        wind: WindParams {
            gust_width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };

    match simulate_sway(&zero_width) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Valid configuration should work
    println!("\n6. Testing valid configuration...");

    let valid = SwayConfig {
        components: WindComponents::STEADY | WindComponents::GUST,
        ..Default::default()
    };

    match simulate_sway(&valid) {
        Ok(trajectory) => println!(
            "   ✓ Success: {} samples, max |θ| = {:.5} rad",
            trajectory.len(),
            trajectory.max_abs_theta()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");

    let bad_alpha = SwayConfig {
        alpha: 0.0,
        ..Default::default()
    };

    match simulate_sway(&bad_alpha) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(FdError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
