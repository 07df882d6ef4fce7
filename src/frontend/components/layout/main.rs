//! Sidebar/header frame around protected pages.

use crate::frontend::assets::APP_CSS;
use crate::frontend::components::layout::{Header, Sidebar};
use crate::frontend::services::session::Role;
use dioxus::prelude::*;
use dioxus_desktop::tao::event::{Event, WindowEvent};
use dioxus_desktop::{use_window, use_wry_event_handler};

/// Viewport width at which the sidebar is forced open, in pixels.
pub const SIDEBAR_BREAKPOINT: u32 = 1024;

/// Sidebar state dictated by the window width in logical pixels. Every
/// resize recomputes this, so a manual toggle does not stick across a
/// breakpoint crossing.
pub fn sidebar_open_for_width(width: u32) -> bool {
    width >= SIDEBAR_BREAKPOINT
}

/// Window width in logical (CSS) pixels. The breakpoint is defined in
/// logical pixels; resize events report physical ones, so the HiDPI scale
/// factor must be divided out before comparing.
fn logical_width(physical_width: u32, scale_factor: f64) -> u32 {
    (f64::from(physical_width) / scale_factor).round() as u32
}

#[component]
pub fn PageLayout(title: &'static str, role: Option<Role>, children: Element) -> Element {
    let window = use_window();
    let mut is_open = use_signal(|| {
        sidebar_open_for_width(logical_width(
            window.inner_size().width,
            window.scale_factor(),
        ))
    });

    // The handler is released when the layout unmounts; it must never
    // outlive the mount.
    use_wry_event_handler({
        let window = window.clone();
        move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                is_open.set(sidebar_open_for_width(logical_width(
                    size.width,
                    window.scale_factor(),
                )));
            }
        }
    });

    rsx! {
        style { dangerous_inner_html: APP_CSS }

        div { class: "app-frame",
            Sidebar { is_open, role }

            div { class: if is_open() { "app-body sidebar-open" } else { "app-body sidebar-closed" },
                Header { title, is_open }

                main { class: "page-content",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_opens_at_breakpoint() {
        assert!(!sidebar_open_for_width(SIDEBAR_BREAKPOINT - 1));
        assert!(sidebar_open_for_width(SIDEBAR_BREAKPOINT));
        assert!(sidebar_open_for_width(1920));
        assert!(!sidebar_open_for_width(800));
    }

    #[test]
    fn breakpoint_compares_logical_pixels() {
        // A 900-logical-pixel window on a scale-factor-2 display reports
        // 1800 physical pixels; the sidebar must still collapse.
        assert_eq!(logical_width(1800, 2.0), 900);
        assert!(!sidebar_open_for_width(logical_width(1800, 2.0)));

        // The same physical width at scale factor 1 is above the breakpoint.
        assert!(sidebar_open_for_width(logical_width(1800, 1.0)));

        // Logical 1024 on HiDPI crosses the breakpoint exactly.
        assert!(sidebar_open_for_width(logical_width(2048, 2.0)));
        assert!(!sidebar_open_for_width(logical_width(2046, 2.0)));
    }
}
