//! Shared create/edit post form.
//!
//! DESIGN
//! ======
//! All state lives in one `RwSignal<PostEditor>` owned by the page; this
//! component only binds inputs to it and reports submit. Tag handling is
//! `PostEditor::on_tag_key` so the chip rules match the CLI.

use leptos::prelude::*;
use thoughts::content::editor::PostEditor;

use crate::util::markdown;

#[component]
pub fn PostForm(
    editor: RwSignal<PostEditor>,
    busy: RwSignal<bool>,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    let show_preview = RwSignal::new(false);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get() {
            on_submit.run(());
        }
    };

    let on_tag_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let mut consumed = false;
        editor.update(|e| consumed = e.on_tag_key(&ev.key()));
        if consumed {
            ev.prevent_default();
        }
    };

    view! {
        <form class="card form editor" on:submit=on_form_submit>
            <label class="form__label">
                "Title"
                <input
                    class="input"
                    type="text"
                    placeholder="Post title"
                    prop:value=move || editor.get().title
                    on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Preview"
                <input
                    class="input"
                    type="text"
                    placeholder="Short summary (optional)"
                    prop:value=move || editor.get().preview
                    on:input=move |ev| editor.update(|e| e.preview = event_target_value(&ev))
                />
            </label>

            <div class="form__label">
                <div class="editor__tabs">
                    <button
                        type="button"
                        class="btn btn--ghost"
                        class:btn--active=move || !show_preview.get()
                        on:click=move |_| show_preview.set(false)
                    >
                        "Write"
                    </button>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        class:btn--active=move || show_preview.get()
                        on:click=move |_| show_preview.set(true)
                    >
                        "Preview"
                    </button>
                </div>
                <Show
                    when=move || show_preview.get()
                    fallback=move || {
                        view! {
                            <textarea
                                class="input textarea editor__content"
                                rows="16"
                                placeholder="Write your post in Markdown..."
                                prop:value=move || editor.get().content
                                on:input=move |ev| editor.update(|e| e.content = event_target_value(&ev))
                            ></textarea>
                        }
                    }
                >
                    <div
                        class="prose editor__preview"
                        inner_html=move || markdown::render_preview(&editor.get().content)
                    ></div>
                </Show>
            </div>

            <div class="form__label">
                "Tags"
                <div class="editor__tags">
                    {move || {
                        editor
                            .get()
                            .tags
                            .into_iter()
                            .map(|tag| {
                                let remove = tag.clone();
                                view! {
                                    <span class="tag tag--chip">
                                        {tag}
                                        <button
                                            type="button"
                                            class="tag__remove"
                                            aria-label="Remove tag"
                                            on:click=move |_| editor.update(|e| e.remove_tag(&remove))
                                        >
                                            "✕"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                    <input
                        class="input editor__tag-input"
                        type="text"
                        placeholder="Add a tag and press Enter"
                        prop:value=move || editor.get().tag_input
                        on:input=move |ev| editor.update(|e| e.tag_input = event_target_value(&ev))
                        on:keydown=on_tag_keydown
                    />
                </div>
            </div>

            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || editor.get().published
                    on:change=move |ev| editor.update(|e| e.published = event_target_checked(&ev))
                />
                <span>{move || if editor.get().published { "Published" } else { "Draft" }}</span>
            </label>

            <div class="form__actions">
                <a class="btn btn--ghost" href="/admin">
                    "Cancel"
                </a>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
