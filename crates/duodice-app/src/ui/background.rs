use eframe::egui::{Mesh, Painter, Rect, Shape};

use crate::ui::theme::ScreenPalette;

#[derive(Debug, Clone, Copy)]
pub(crate) struct BackgroundViewModel {
    pub(crate) palette: ScreenPalette,
}

impl BackgroundViewModel {
    #[must_use]
    pub(crate) fn new(palette: ScreenPalette) -> Self {
        Self { palette }
    }
}

/// Fills `rect` with the vertical gradient of the current palette.
pub(crate) fn paint(painter: &Painter, rect: Rect, vm: &BackgroundViewModel) {
    let ScreenPalette {
        gradient_top,
        gradient_bottom,
        ..
    } = vm.palette;

    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), gradient_top);
    mesh.colored_vertex(rect.right_top(), gradient_top);
    mesh.colored_vertex(rect.left_bottom(), gradient_bottom);
    mesh.colored_vertex(rect.right_bottom(), gradient_bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}
