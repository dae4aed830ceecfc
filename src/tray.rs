//! System tray shell
//!
//! Owns the main-thread event loop. The menu carries a disabled status line
//! showing the active chord and a Quit action. Quit tears down the
//! application context (releasing the instance lock) and terminates the
//! process, which also ends the background hotkey listener thread; a typing
//! run in flight at that moment is simply cut short.

use crate::app::App;
use std::time::{Duration, Instant};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem},
    Icon, TrayIconBuilder,
};

/// Menu item IDs
mod menu_ids {
    pub const QUIT: &str = "quit";
}

/// Procedural fallback icon: a filled disc on transparent ground, used when
/// no icon asset ships alongside the binary.
fn fallback_icon() -> Result<Icon, tray_icon::BadIcon> {
    const SIZE: u32 = 32;
    let center = (SIZE as f32 - 1.0) / 2.0;
    let radius = SIZE as f32 / 2.0 - 2.0;

    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                rgba.extend_from_slice(&[0x2e, 0x86, 0xde, 0xff]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    Icon::from_rgba(rgba, SIZE, SIZE)
}

/// Log a fatal tray failure, tear down, and exit non-zero.
fn fail(mut app: App, what: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!("{}: {}", what, err);
    app.shutdown();
    std::process::exit(1);
}

/// Run the tray shell on the main thread.
///
/// Never returns: every exit path goes through `std::process::exit`, so
/// context teardown happens here, before the exit call.
pub fn run(mut app: App) -> ! {
    let menu = Menu::new();
    let status_item = MenuItem::new(format!("Hotkey: {}", app.config.hotkey.chord), false, None);
    let quit_item = MenuItem::with_id(menu_ids::QUIT, "Quit", true, None);

    if let Err(e) = menu.append_items(&[&status_item, &PredefinedMenuItem::separator(), &quit_item])
    {
        fail(app, "Tray menu setup failed", e);
    }

    let icon = match fallback_icon() {
        Ok(icon) => icon,
        Err(e) => fail(app, "Tray icon generation failed", e),
    };

    let event_loop = EventLoopBuilder::new().build();

    let tray = match TrayIconBuilder::new()
        .with_tooltip("copycat")
        .with_icon(icon)
        .with_menu(Box::new(menu))
        .build()
    {
        Ok(tray) => tray,
        Err(e) => fail(app, "Failed to create tray icon", e),
    };

    tracing::info!("copycat running in tray");

    let menu_channel = MenuEvent::receiver();

    event_loop.run(move |_event, _, control_flow| {
        // Poll so menu events are picked up promptly.
        *control_flow = ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(100));

        if let Ok(event) = menu_channel.try_recv() {
            if event.id().0.as_str() == menu_ids::QUIT {
                tracing::info!("Quit selected, shutting down");
                let _ = tray.set_visible(false);
                app.shutdown();
                *control_flow = ControlFlow::Exit;
            }
        }
    });
}
