use crate::app::{JobList, Message};
use iced::widget::{button, center, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};
use restora_core::UploadJob;

pub fn view(list: &JobList) -> Element<'_, Message> {
    let header = row![
        text("Uploaded jobs").size(18),
        horizontal_space(),
        button("Close")
            .on_press(Message::CloseJobList)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if list.loading {
        center(text("Loading...").size(14)).height(120.0).into()
    } else if list.jobs.is_empty() {
        center(text("No files or jobs found").size(14)).height(120.0).into()
    } else {
        let deleting = list.deleting.as_deref();
        scrollable(
            column(
                list.jobs
                    .iter()
                    .map(|job| job_row(job, deleting == Some(job.id.as_str()))),
            )
            .spacing(8),
        )
        .height(Length::Fill)
        .into()
    };

    container(column![header, body].spacing(16))
        .width(480.0)
        .max_height(520.0)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn job_row(job: &UploadJob, deleting: bool) -> Element<'_, Message> {
    let info = column![
        text(job.file_name()).size(14),
        text(&job.upload_date).size(11),
    ]
    .spacing(2);

    let open = button("Open").on_press_maybe((!deleting).then(|| Message::OpenJob(job.id.clone())));
    let delete = button(text(if deleting { "Deleting..." } else { "Delete" }))
        .on_press_maybe((!deleting).then(|| Message::DeleteJob(job.id.clone())))
        .style(button::danger);

    container(
        row![info, horizontal_space(), open, delete]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(10)
    .style(container::rounded_box)
    .into()
}
