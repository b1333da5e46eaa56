#[test]
#[ignore = "E2E not implemented; exercised manually against the live API"]
fn e2e_scenario_1_cancelled_picker_keeps_previous_results() {
    // Scenario 1: Cancelled picker
    // Given a plate was already analyzed
    // When the user opens the picker and dismisses it
    // Then the previous photo and result list stay on screen
    // And the spinner is not shown
    todo!("Implement Scenario 1 E2E");
}

#[test]
#[ignore = "E2E not implemented; exercised manually against the live API"]
fn e2e_scenario_2_plate_without_vegetable_shows_tip() {
    // Scenario 2: Plate without vegetables
    // Given a photo whose concepts contain no "vegetable"
    // When classification completes
    // Then every concept is listed with its percentage
    // And the banner reads "Adicione vegetais em seu prato!"
    todo!("Implement Scenario 2 E2E");
}

#[test]
#[ignore = "E2E not implemented; exercised manually against the live API"]
fn e2e_scenario_3_unreadable_photo_shows_permission_alert() {
    // Scenario 3: Unreadable photo
    // Given a picked file the process may not read
    // When the flow checks access
    // Then a blocking alert asks for album permission
    // And no screen state changes
    todo!("Implement Scenario 3 E2E");
}
