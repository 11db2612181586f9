use duodice_core::DieFace;
use eframe::egui::{
    Align2, Color32, FontId, Id, Painter, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};

/// Side length of a die, in points.
pub(crate) const DIE_SIZE: f32 = 128.0;

const CORNER_RADIUS: f32 = 8.0;
const BORDER_WIDTH: f32 = 1.0;
const BUZZ_EXTRA_BORDER_WIDTH: f32 = 3.0;
const PIP_RADIUS: f32 = 8.0;
const MASK_FONT_SIZE: f32 = 36.0;
const FADE_SECONDS: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DieViewModel {
    /// `None` shows the face-down mark.
    face: Option<DieFace>,
    color: Color32,
    /// Border pulse strength in `0.0..=1.0`.
    buzz: f32,
}

impl DieViewModel {
    #[must_use]
    pub(crate) fn new(face: Option<DieFace>, color: Color32, buzz: f32) -> Self {
        Self { face, color, buzz }
    }

    #[must_use]
    pub(crate) fn face(&self) -> Option<DieFace> {
        self.face
    }
}

/// Faces swapped in and out of one die.
///
/// `flipped` changes on every swap so that egui's bool animation runs toward
/// the new side; the progress of the incoming face is measured from it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CrossFade {
    current: Option<DieFace>,
    previous: Option<DieFace>,
    flipped: bool,
}

impl CrossFade {
    fn new(shown: Option<DieFace>) -> Self {
        Self {
            current: shown,
            previous: shown,
            flipped: false,
        }
    }

    fn update(&mut self, shown: Option<DieFace>) {
        if self.current != shown {
            self.previous = self.current;
            self.current = shown;
            self.flipped = !self.flipped;
        }
    }

    /// Opacity of the incoming face for an animated value of `flipped`.
    fn progress(self, animated: f32) -> f32 {
        if self.flipped { animated } else { 1.0 - animated }
    }
}

pub(crate) fn show(ui: &mut Ui, id: Id, vm: &DieViewModel) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(DIE_SIZE), Sense::hover());

    let fade = ui.ctx().data_mut(|data| {
        let fade = data.get_temp_mut_or_insert_with(id, || CrossFade::new(vm.face()));
        fade.update(vm.face());
        *fade
    });
    let animated = ui
        .ctx()
        .animate_bool_with_time(id.with("cross_fade"), fade.flipped, FADE_SECONDS);
    let progress = fade.progress(animated);

    let painter = ui.painter();
    let border = Stroke::new(
        BORDER_WIDTH + BUZZ_EXTRA_BORDER_WIDTH * vm.buzz,
        vm.color,
    );
    painter.rect_stroke(rect, CORNER_RADIUS, border, StrokeKind::Inside);

    if progress < 1.0 {
        draw_content(painter, rect, fade.previous, vm.color.gamma_multiply(1.0 - progress));
    }
    draw_content(painter, rect, fade.current, vm.color.gamma_multiply(progress));
}

fn draw_content(painter: &Painter, rect: Rect, face: Option<DieFace>, color: Color32) {
    match face {
        Some(face) => draw_pips(painter, rect, face, color),
        None => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "?",
                FontId::proportional(MASK_FONT_SIZE),
                color,
            );
        }
    }
}

fn draw_pips(painter: &Painter, rect: Rect, face: DieFace, color: Color32) {
    for pip in face.pips().iter_pips() {
        let (x, y) = pip.offset();
        let center = rect.min + rect.size() * Vec2::new(x, y);
        painter.circle_filled(center, PIP_RADIUS, color);
    }
}
