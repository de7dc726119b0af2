use super::*;


/// One table of ten seats, the usual fixture
fn controller_with_table() -> AdmissionController {
    let controller = AdmissionController::new();
    controller.add_table(1, 10).unwrap();
    controller
}
