use aid_core::wizard::{ForwardAction, StepView};
use services::{ImageLoader, ImageSlot, PLACEHOLDER_TEXT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageVm {
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
    },
    Placeholder(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub title: String,
    pub progress_label: String,
    pub text: String,
    pub image: ImageVm,
    pub show_previous: bool,
    pub forward: ForwardAction,
    pub forward_label: &'static str,
}

#[must_use]
pub fn map_step(step: &StepView<'_>, images: &ImageLoader) -> StepVm {
    let image = match images.load_or_placeholder(step.topic.image_path()) {
        ImageSlot::Image(image) => ImageVm::Image {
            src: image.data_uri,
            alt: step.topic.name().to_string(),
            width: image.size.width,
            height: image.size.height,
        },
        ImageSlot::Placeholder => ImageVm::Placeholder(PLACEHOLDER_TEXT),
    };

    StepVm {
        title: step.title(),
        progress_label: format!("Step {} of {}", step.number(), step.total()),
        text: step.text.to_string(),
        image,
        show_previous: step.show_previous,
        forward: step.forward,
        forward_label: step.forward.label(),
    }
}
