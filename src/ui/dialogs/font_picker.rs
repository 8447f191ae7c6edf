use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    browser::HoldBrowser,
    button::Button,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;

/// Line (1-based, as the browser counts) of `family` in `families`.
pub fn preselected_line(families: &[String], family: &str) -> Option<i32> {
    families
        .iter()
        .position(|f| f.eq_ignore_ascii_case(family))
        .and_then(|idx| i32::try_from(idx + 1).ok())
}

/// Show the "Choose Font" dialog.
///
/// Returns the family selected when OK was pressed. Cancel, closing the
/// window, or OK with nothing selected return `None`.
pub fn show_font_dialog(current_family: &str, families: &[String]) -> Option<String> {
    let mut dialog = Window::default()
        .with_size(400, 300)
        .with_label("Choose Font")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 380, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut browser = HoldBrowser::default();
    // family names are shown literally, not as '@' formatting
    browser.set_format_char('\0');
    for family in families {
        browser.add(family);
    }
    if let Some(line) = preselected_line(families, current_family) {
        browser.select(line);
        browser.middle_line(line);
    }

    let mut buttons = Flex::default();
    buttons.set_type(fltk::group::FlexType::Row);
    buttons.set_spacing(10);
    let mut ok_btn = Button::default().with_label("OK");
    let mut cancel_btn = Button::default().with_label("Cancel");
    buttons.end();
    flex.fixed(&buttons, 30);

    flex.end();
    dialog.end();

    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let chosen_ok = chosen.clone();
    let browser_ok = browser.clone();
    let mut dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        let line = browser_ok.value();
        if line > 0 {
            *chosen_ok.borrow_mut() = browser_ok.text(line);
        }
        dialog_ok.hide();
    });

    let mut dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.hide();
    });

    dialog.set_callback(move |d| {
        d.hide();
    });

    dialog.show();
    run_dialog(&dialog);

    chosen.borrow_mut().take()
}
