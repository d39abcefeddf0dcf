use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ColorPanel, Dashboard, LandingPage, NavBar, TestPopup};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let now = tui.now();
    let area = frame.area();

    match &app.route {
        Route::Landing => {
            // The page fills the screen; the fixed nav bar sits over its top row
            LandingPage::new(&mut tui.landing, app, now).render(frame, area);
            NavBar::new(&app.status_message).render(frame, nav_area(area));
        }
        Route::Dashboard { initial_input } => {
            use Constraint::{Length, Min};
            let [nav, main] = Layout::vertical([Length(1), Min(0)]).areas(area);
            NavBar::new(&app.status_message).render(frame, nav);
            Dashboard::new(initial_input.as_deref()).render(frame, main);
        }
    }

    if let Some(panel) = tui.color_panel.as_mut() {
        ColorPanel::new(panel, app.palette).render(frame, area);
    }
    if let Some(popup) = tui.test_popup.as_ref() {
        TestPopup::new(popup, now).render(frame, area);
    }
}

fn nav_area(area: Rect) -> Rect {
    Rect {
        height: area.height.min(1),
        ..area
    }
}
