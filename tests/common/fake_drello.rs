//! In-memory drello
//!
//! A [`MockWebDriver`] scripted to behave like the parts of drello the
//! scenarios touch. Application state lives in [`Drello`]; after every
//! navigation, click and reload the current view is rendered into the mock
//! document from scratch, using the locators the page objects export.

use std::sync::{Arc, Mutex};

use drello_e2e::components::board::{column, columns_list, header, settings_popup, task, task_list};
use drello_e2e::components::boards::{board_templates, boards_list, create_board_form};
use drello_e2e::components::main_header;
use drello_e2e::components::task::task_settings_popup as popup;
use drello_e2e::components::BoardTemplates;
use drello_e2e::locator::Locator;
use drello_e2e::pages::{board_page, boards_page, login_page};
use drello_e2e::webdriver::{MockDom, MockWebDriver};

const WEEK_PLAN_COLUMNS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const PROJECT_MANAGEMENT_COLUMNS: [&str; 3] = ["Backlog", "In progress", "Done"];

#[derive(Debug, Default)]
struct Board {
    title: String,
    labels: Vec<String>,
    columns: Vec<BoardColumn>,
}

#[derive(Debug, Default)]
struct BoardColumn {
    title: String,
    tasks: Vec<Card>,
}

#[derive(Debug, Default)]
struct Card {
    title: String,
    description: String,
    labels: Vec<String>,
    checklists: Vec<Checklist>,
    comments: Vec<String>,
}

#[derive(Debug, Default)]
struct Checklist {
    name: String,
    items: Vec<(String, bool)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Login,
    Boards,
    Board(usize),
}

/// Transient UI state; a reload resets it except for the open task
#[derive(Debug, Default)]
struct Overlays {
    create_board_form: bool,
    board_settings: bool,
    confirm_delete_board: bool,
    column_form: bool,
    task_form: Option<usize>,
    open_task: Option<(usize, usize)>,
    labels_popup: bool,
    label_form: bool,
    confirm_delete_task: bool,
    checklist_form: bool,
    checklist_item_form: bool,
}

/// Application state of the fake
#[derive(Debug)]
pub struct Drello {
    login: String,
    password: String,
    signed_in: bool,
    boards: Vec<Board>,
    view: View,
    overlays: Overlays,
}

impl Drello {
    pub fn new(login: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            signed_in: false,
            boards: Vec::new(),
            view: View::Login,
            overlays: Overlays::default(),
        }
    }

    /// Titles of all boards, in creation order
    pub fn board_titles(&self) -> Vec<String> {
        self.boards.iter().map(|b| b.title.clone()).collect()
    }

    fn navigate(&mut self, url: &str) {
        self.overlays = Overlays::default();
        let path = url::Url::parse(url)
            .map(|u| u.path().to_string())
            .unwrap_or_default();

        self.view = match (path.as_str(), self.signed_in, self.view) {
            (_, false, _) => View::Login,
            ("/login", true, _) => View::Boards,
            ("/board", true, View::Board(index)) => View::Board(index),
            _ => View::Boards,
        };
    }

    fn reload(&mut self) {
        let open_task = self.overlays.open_task;
        self.overlays = Overlays {
            open_task,
            ..Overlays::default()
        };
    }

    fn click(&mut self, dom: &MockDom, clicked: &Locator) {
        match self.view {
            View::Login => self.click_login(dom, clicked),
            View::Boards => {
                self.click_main_header(clicked);
                self.click_boards(dom, clicked);
            }
            View::Board(index) => {
                self.click_main_header(clicked);
                if self.overlays.open_task.is_some() {
                    self.click_task_popup(dom, index, clicked);
                } else {
                    self.click_board(dom, index, clicked);
                }
            }
        }
    }

    fn click_login(&mut self, dom: &MockDom, clicked: &Locator) {
        if clicked == &login_page::SUBMIT_BUTTON
            && dom.value_of(&login_page::LOGIN_INPUT) == Some(self.login.as_str())
            && dom.value_of(&login_page::PASSWORD_INPUT) == Some(self.password.as_str())
        {
            self.signed_in = true;
            self.view = View::Boards;
        }
    }

    fn click_main_header(&mut self, clicked: &Locator) {
        if clicked == &main_header::BOARDS_BUTTON {
            self.overlays = Overlays::default();
            self.view = View::Boards;
        } else if clicked == &main_header::LOGOUT_BUTTON {
            self.overlays = Overlays::default();
            self.signed_in = false;
            self.view = View::Login;
        }
    }

    fn click_boards(&mut self, dom: &MockDom, clicked: &Locator) {
        if clicked == &create_board_form::OPEN_BUTTON {
            self.overlays.create_board_form = true;
        } else if clicked == &create_board_form::CLOSE_BUTTON {
            self.overlays.create_board_form = false;
        } else if clicked == &create_board_form::SUBMIT_BUTTON {
            let title = dom
                .value_of(&create_board_form::TITLE_INPUT)
                .unwrap_or_default()
                .trim()
                .to_string();
            if !title.is_empty() {
                self.open_new_board(title, &[]);
            }
        } else if clicked == &board_templates::WEEK_PLAN_TEMPLATE {
            self.open_new_board(BoardTemplates::WEEK_PLAN_BOARD_NAME.to_string(), &WEEK_PLAN_COLUMNS);
        } else if clicked == &board_templates::PROJECT_MANAGEMENT_TEMPLATE {
            self.open_new_board(
                BoardTemplates::PROJECT_MANAGEMENT_BOARD_NAME.to_string(),
                &PROJECT_MANAGEMENT_COLUMNS,
            );
        } else if let Some(index) = self
            .boards
            .iter()
            .position(|b| clicked == &boards_list::board_card(&b.title))
        {
            self.overlays = Overlays::default();
            self.view = View::Board(index);
        }
    }

    fn open_new_board(&mut self, title: String, columns: &[&str]) {
        self.boards.push(Board {
            title,
            labels: Vec::new(),
            columns: columns
                .iter()
                .map(|title| BoardColumn {
                    title: title.to_string(),
                    tasks: Vec::new(),
                })
                .collect(),
        });
        self.overlays = Overlays::default();
        self.view = View::Board(self.boards.len() - 1);
    }

    fn click_board(&mut self, dom: &MockDom, index: usize, clicked: &Locator) {
        if clicked == &header::BOARD_SETTINGS_BUTTON {
            self.overlays.board_settings = true;
        } else if clicked == &settings_popup::DELETE_BUTTON {
            self.overlays.confirm_delete_board = true;
        } else if clicked == &settings_popup::CONFIRM_DELETE_BUTTON {
            self.boards.remove(index);
            self.overlays = Overlays::default();
            self.view = View::Boards;
        } else if clicked == &columns_list::ADD_COLUMN_BUTTON {
            self.overlays.column_form = true;
        } else if clicked == &columns_list::SAVE_COLUMN_BUTTON {
            let title = dom
                .value_of(&columns_list::COLUMN_TITLE_INPUT)
                .unwrap_or_default()
                .to_string();
            self.boards[index].columns.push(BoardColumn {
                title,
                tasks: Vec::new(),
            });
            self.overlays.column_form = false;
        } else {
            self.click_column(dom, index, clicked);
        }
    }

    fn click_column(&mut self, dom: &MockDom, index: usize, clicked: &Locator) {
        for (c, col) in self.boards[index].columns.iter_mut().enumerate() {
            let list = task_list_root(&col.title);
            if clicked == &scoped(&list, &task_list::ADD_TASK_BUTTON) {
                self.overlays.task_form = Some(c);
                return;
            }
            if clicked == &scoped(&list, &task_list::SAVE_TASK_BUTTON) {
                let title = dom
                    .value_of(&scoped(&list, &task_list::TASK_TITLE_INPUT))
                    .unwrap_or_default()
                    .to_string();
                col.tasks.push(Card {
                    title,
                    ..Card::default()
                });
                self.overlays.task_form = None;
                return;
            }
            if let Some(t) = col
                .tasks
                .iter()
                .position(|card| clicked == &scoped(&list, &task_list::task(&card.title)))
            {
                self.overlays.open_task = Some((c, t));
                return;
            }
        }
    }

    fn click_task_popup(&mut self, dom: &MockDom, index: usize, clicked: &Locator) {
        let Some((c, t)) = self.overlays.open_task else {
            return;
        };
        let board = &mut self.boards[index];
        let card = &mut board.columns[c].tasks[t];
        let typed = |locator: &Locator| dom.value_of(locator).unwrap_or_default().to_string();

        if clicked == &popup::CLOSE_BUTTON {
            self.overlays = Overlays::default();
        } else if clicked == &popup::SAVE_TASK_NAME_BUTTON {
            card.title = typed(&popup::TASK_NAME_INPUT);
        } else if clicked == &popup::SAVE_DESCRIPTION_BUTTON {
            card.description = typed(&popup::DESCRIPTION_INPUT);
        } else if clicked == &popup::OPEN_LABELS_BUTTON {
            self.overlays.labels_popup = true;
        } else if clicked == &popup::ADD_LABEL_BUTTON {
            self.overlays.label_form = true;
        } else if clicked == &popup::SAVE_LABEL_BUTTON {
            board.labels.push(typed(&popup::LABEL_NAME_INPUT));
            self.overlays.label_form = false;
        } else if clicked == &popup::CLOSE_LABELS_BUTTON {
            self.overlays.labels_popup = false;
            self.overlays.label_form = false;
        } else if let Some(label) = board
            .labels
            .iter()
            .find(|label| clicked == &popup::board_label(label))
        {
            if !card.labels.contains(label) {
                card.labels.push(label.clone());
            }
        } else if clicked == &popup::DELETE_TASK_BUTTON {
            self.overlays.confirm_delete_task = true;
        } else if clicked == &popup::CONFIRM_DELETE_TASK_BUTTON {
            board.columns[c].tasks.remove(t);
            self.overlays = Overlays::default();
        } else if clicked == &popup::ADD_CHECKLIST_BUTTON {
            self.overlays.checklist_form = true;
        } else if clicked == &popup::SAVE_CHECKLIST_BUTTON {
            card.checklists.push(Checklist {
                name: typed(&popup::CHECKLIST_NAME_INPUT),
                items: Vec::new(),
            });
            self.overlays.checklist_form = false;
        } else if clicked == &popup::ADD_CHECKLIST_ITEM_BUTTON {
            self.overlays.checklist_item_form = true;
        } else if clicked == &popup::SAVE_CHECKLIST_ITEM_BUTTON {
            let text = typed(&popup::CHECKLIST_ITEM_INPUT);
            if let Some(checklist) = card.checklists.last_mut() {
                checklist.items.push((text, false));
            }
            self.overlays.checklist_item_form = false;
        } else if clicked == &popup::SEND_COMMENT_BUTTON {
            card.comments.push(typed(&popup::COMMENT_INPUT));
        } else if clicked == &popup::DELETE_COMMENT_BUTTON {
            if !card.comments.is_empty() {
                card.comments.remove(0);
            }
        } else {
            card.checklists.retain(|checklist| {
                clicked != &scoped(&popup::checklist(&checklist.name), &popup::DELETE_CHECKLIST_BUTTON)
            });
            for checklist in &mut card.checklists {
                for (text, done) in &mut checklist.items {
                    let checkbox = scoped(&popup::checklist_item(text), &popup::CHECKLIST_ITEM_CHECKBOX);
                    if clicked == &checkbox {
                        *done = !*done;
                    }
                }
            }
        }
    }

    fn render(&self, dom: &mut MockDom) {
        dom.clear();
        match self.view {
            View::Login => {
                dom.insert(login_page::CONTAINER, "");
                dom.insert(login_page::LOGIN_INPUT, "");
                dom.insert(login_page::PASSWORD_INPUT, "");
                dom.insert(login_page::SUBMIT_BUTTON, "Sign in");
            }
            View::Boards => {
                self.render_main_header(dom);
                self.render_boards(dom);
            }
            View::Board(index) => {
                self.render_main_header(dom);
                self.render_board(dom, &self.boards[index]);
            }
        }
    }

    fn render_main_header(&self, dom: &mut MockDom) {
        dom.insert(main_header::CONTAINER, "");
        dom.insert(main_header::BOARDS_BUTTON, "Boards");
        dom.insert(main_header::USERNAME, self.login.as_str());
        dom.insert(main_header::LOGOUT_BUTTON, "Log out");
    }

    fn render_boards(&self, dom: &mut MockDom) {
        dom.insert(boards_page::CONTAINER, "");
        dom.insert(boards_list::CONTAINER, "");
        for board in &self.boards {
            dom.insert(boards_list::BOARD_CARD, board.title.as_str());
            dom.insert(boards_list::board_card(&board.title), board.title.as_str());
        }

        dom.insert(create_board_form::OPEN_BUTTON, "Create board");
        if self.overlays.create_board_form {
            dom.insert(create_board_form::CONTAINER, "");
            dom.insert(create_board_form::TITLE_INPUT, "");
            dom.insert(create_board_form::SUBMIT_BUTTON, "Create");
            dom.insert(create_board_form::CLOSE_BUTTON, "");
        }

        dom.insert(board_templates::CONTAINER, "");
        dom.insert(board_templates::WEEK_PLAN_TEMPLATE, BoardTemplates::WEEK_PLAN_BOARD_NAME);
        dom.insert(
            board_templates::PROJECT_MANAGEMENT_TEMPLATE,
            BoardTemplates::PROJECT_MANAGEMENT_BOARD_NAME,
        );
    }

    fn render_board(&self, dom: &mut MockDom, board: &Board) {
        dom.insert(board_page::CONTAINER, "");
        dom.insert(header::BOARD_TITLE, board.title.as_str());
        dom.insert(header::BOARD_SETTINGS_BUTTON, "");
        dom.insert(header::ADD_MEMBERS_BUTTON, "");

        if self.overlays.board_settings {
            dom.insert(settings_popup::CONTAINER, "");
            dom.insert(settings_popup::DELETE_BUTTON, "Delete board");
            if self.overlays.confirm_delete_board {
                dom.insert(settings_popup::CONFIRM_DELETE_BUTTON, "Delete");
            }
        }

        dom.insert(columns_list::CONTAINER, "");
        dom.insert(columns_list::ADD_COLUMN_BUTTON, "Add column");
        if self.overlays.column_form {
            dom.insert(columns_list::COLUMN_TITLE_INPUT, "");
            dom.insert(columns_list::SAVE_COLUMN_BUTTON, "Save");
        }

        for (c, col) in board.columns.iter().enumerate() {
            let root = columns_list::column(&col.title);
            dom.insert(scoped(&root, &column::TITLE), col.title.as_str());
            dom.insert(root, "");

            let list = task_list_root(&col.title);
            dom.insert(list.clone(), "");
            dom.insert(scoped(&list, &task_list::ADD_TASK_BUTTON), "Add task");
            if self.overlays.task_form == Some(c) {
                dom.insert(scoped(&list, &task_list::TASK_TITLE_INPUT), "");
                dom.insert(scoped(&list, &task_list::SAVE_TASK_BUTTON), "Save");
            }
            for card in &col.tasks {
                let root = scoped(&list, &task_list::task(&card.title));
                dom.insert(scoped(&root, &task::TITLE), card.title.as_str());
                dom.insert(root, card.title.as_str());
            }
        }

        if let Some((c, t)) = self.overlays.open_task {
            self.render_task_popup(dom, board, &board.columns[c].tasks[t]);
        }
    }

    fn render_task_popup(&self, dom: &mut MockDom, board: &Board, card: &Card) {
        dom.insert(popup::CONTAINER, "");
        dom.insert(popup::CLOSE_BUTTON, "");
        dom.insert(popup::TASK_NAME, card.title.as_str());
        dom.insert(popup::TASK_NAME_INPUT, "");
        dom.insert(popup::SAVE_TASK_NAME_BUTTON, "Save");
        dom.insert(popup::DESCRIPTION, card.description.as_str());
        dom.insert(popup::DESCRIPTION_INPUT, "");
        dom.insert(popup::SAVE_DESCRIPTION_BUTTON, "Save");

        dom.insert(popup::OPEN_LABELS_BUTTON, "Labels");
        for label in &card.labels {
            dom.insert(popup::bound_label(label), label.as_str());
        }
        if self.overlays.labels_popup {
            dom.insert(popup::LABELS_POPUP, "");
            dom.insert(popup::ADD_LABEL_BUTTON, "New label");
            dom.insert(popup::CLOSE_LABELS_BUTTON, "");
            for label in &board.labels {
                dom.insert(popup::board_label(label), label.as_str());
            }
            if self.overlays.label_form {
                dom.insert(popup::LABEL_NAME_INPUT, "");
                dom.insert(popup::SAVE_LABEL_BUTTON, "Save");
            }
        }

        dom.insert(popup::DELETE_TASK_BUTTON, "Delete task");
        if self.overlays.confirm_delete_task {
            dom.insert(popup::CONFIRM_DELETE_TASK_BUTTON, "Delete");
        }

        dom.insert(popup::ADD_CHECKLIST_BUTTON, "Checklist");
        if self.overlays.checklist_form {
            dom.insert(popup::CHECKLIST_NAME_INPUT, "");
            dom.insert(popup::SAVE_CHECKLIST_BUTTON, "Save");
        }
        for checklist in &card.checklists {
            let root = popup::checklist(&checklist.name);
            dom.insert(scoped(&root, &popup::DELETE_CHECKLIST_BUTTON), "");
            dom.insert(root, checklist.name.as_str());
            for (text, done) in &checklist.items {
                let checkbox = scoped(&popup::checklist_item(text), &popup::CHECKLIST_ITEM_CHECKBOX);
                dom.insert(checkbox.clone(), "");
                dom.set_selected(&checkbox, *done);
                dom.insert(popup::checklist_item(text), text.as_str());
            }
        }
        if !card.checklists.is_empty() {
            dom.insert(popup::ADD_CHECKLIST_ITEM_BUTTON, "Add item");
            if self.overlays.checklist_item_form {
                dom.insert(popup::CHECKLIST_ITEM_INPUT, "");
                dom.insert(popup::SAVE_CHECKLIST_ITEM_BUTTON, "Save");
            }
        }

        dom.insert(popup::COMMENT_INPUT, "");
        dom.insert(popup::SEND_COMMENT_BUTTON, "Send");
        for text in &card.comments {
            dom.insert(popup::comment(text), text.as_str());
        }
        if !card.comments.is_empty() {
            dom.insert(popup::DELETE_COMMENT_BUTTON, "Delete");
        }
    }
}

fn scoped(parent: &Locator, child: &Locator) -> Locator {
    parent.join(child).expect("fixture locators scope")
}

fn task_list_root(column_title: &str) -> Locator {
    scoped(&columns_list::column(column_title), &column::TASK_LIST)
}

/// A mock driver wired to a fresh [`Drello`]
///
/// The returned handle gives tests direct access to the application state.
pub fn driver(login: &str, password: &str) -> (MockWebDriver, Arc<Mutex<Drello>>) {
    let app = Arc::new(Mutex::new(Drello::new(login, password)));

    let on_navigate = app.clone();
    let on_click = app.clone();
    let on_refresh = app.clone();

    let driver = MockWebDriver::new()
        .on_navigate(move |dom, url| {
            let mut app = on_navigate.lock().expect("drello state poisoned");
            app.navigate(url);
            app.render(dom);
        })
        .on_click(move |dom, clicked| {
            let mut app = on_click.lock().expect("drello state poisoned");
            app.click(dom, clicked);
            app.render(dom);
        })
        .on_refresh(move |dom| {
            let mut app = on_refresh.lock().expect("drello state poisoned");
            app.reload();
            app.render(dom);
        });

    (driver, app)
}
