//! Status item with frame-based icon updates.
//!
//! Owns the menu bar icon, its four animation frames, and the right-click
//! context menu (title, separator, Quit). Left clicks do not open the menu;
//! they are dispatched as toggle commands by the click handler.

use crate::{AppError, AppResult, Appearance, IconFrame, appearance};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use whilom_core::SleepState;

/// Status item manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    appearance: Appearance,
    current_frame: IconFrame,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the status item showing the resting sleep-enabled frame.
    #[track_caller]
    #[instrument]
    pub fn new(appearance: Appearance) -> AppResult<Self> {
        let menu = Menu::new();

        let title_item = MenuItem::new(
            format!("\u{1f49d} whilom {}", env!("CARGO_PKG_VERSION")),
            false,
            None,
        );
        let quit_item = MenuItem::new("Quit", true, None);

        let quit_id = quit_item.id().clone();

        menu.append(&title_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add title menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::load_frame(IconFrame::Off, appearance)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip_for(SleepState::Enabled))
            .with_menu(Box::new(menu))
            .with_show_menu_on_left_click(false)
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create status item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(?appearance, "Status item initialized");

        Ok(Self {
            tray_icon,
            appearance,
            current_frame: IconFrame::Off,
            quit_item_id: quit_id,
        })
    }

    /// Swap the status icon to the given animation frame.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_frame(&mut self, frame: IconFrame) -> AppResult<()> {
        let icon = Self::load_frame(frame, self.appearance)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.current_frame = frame;

        Ok(())
    }

    /// Re-render the current frame after a dark/light change.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_appearance(&mut self, appearance: Appearance) -> AppResult<()> {
        if appearance == self.appearance {
            return Ok(());
        }

        self.appearance = appearance;
        self.set_frame(self.current_frame)
    }

    /// Update the tooltip for a settled sleep state.
    #[track_caller]
    pub fn set_tooltip(&mut self, state: SleepState) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(Self::tooltip_for(state)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn tooltip_for(state: SleepState) -> &'static str {
        match state {
            SleepState::Enabled => "whilom - sleep enabled",
            SleepState::Disabled => "whilom - sleep disabled",
        }
    }

    /// Load a frame from compile-time embedded PNG bytes.
    ///
    /// Icons are embedded via include_bytes! so they work regardless of
    /// install location. In dark appearance the frame is color-inverted,
    /// alpha untouched.
    #[track_caller]
    fn load_frame(frame: IconFrame, appearance: Appearance) -> AppResult<Icon> {
        let png_bytes: &[u8] = match frame {
            IconFrame::Off => include_bytes!("../resources/icons/hattie-off.png"),
            IconFrame::Wake1 => include_bytes!("../resources/icons/hattie-on-1.png"),
            IconFrame::Wake2 => include_bytes!("../resources/icons/hattie-on-2.png"),
            IconFrame::Wake3 => include_bytes!("../resources/icons/hattie-on-3.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut rgba = img.into_rgba8();

        if appearance == Appearance::Dark {
            appearance::invert_rgba(&mut rgba);
        }

        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}
