//! Resume upload form.
//!
//! Posts to [`ANALYZE_URL`] as a plain multipart submission with the
//! `resume` file and an optional `job_description`.

use leptos::*;

use crate::{
    ACCEPT_ATTRIBUTE, ANALYZE_BUTTON_ID, ANALYZE_URL, BUTTON_TEXT_ID, HIDDEN_CLASS, IDLE_TEXT,
    LOADING_SPINNER_ID, MAX_FILE_SIZE_MB, RESUME_FORM_ID, RESUME_INPUT_ID,
};

#[component]
pub fn ResumeForm() -> impl IntoView {
    let spinner_class = format!("spinner-border spinner-border-sm me-2 {}", HIDDEN_CLASS);

    view! {
        <form
            id=RESUME_FORM_ID
            action=ANALYZE_URL
            method="post"
            enctype="multipart/form-data"
            class="card card-body shadow-sm"
        >
            <div class="mb-3">
                <label for=RESUME_INPUT_ID class="form-label">"Resume"</label>
                <input
                    type="file"
                    class="form-control"
                    id=RESUME_INPUT_ID
                    name="resume"
                    accept=ACCEPT_ATTRIBUTE
                    required=true
                />
                <div class="form-text">
                    {format!("PDF, DOCX, DOC or TXT, up to {}MB.", MAX_FILE_SIZE_MB)}
                </div>
            </div>

            <div class="mb-3">
                <label for="job_description" class="form-label">
                    "Job description (optional)"
                </label>
                <textarea
                    class="form-control"
                    id="job_description"
                    name="job_description"
                    rows="6"
                    placeholder="Paste the job description to get a match score"
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" id=ANALYZE_BUTTON_ID>
                <span
                    id=LOADING_SPINNER_ID
                    class=spinner_class
                    role="status"
                    aria-hidden="true"
                ></span>
                <span id=BUTTON_TEXT_ID>{IDLE_TEXT}</span>
            </button>
        </form>
    }
}
