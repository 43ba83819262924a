use std::io::{BufRead, Write};

use catalog_core::collection::ProductCollection;
use catalog_core::error::Result;
use catalog_core::file_handling;
use catalog_core::product::{Category, Product};
use itertools::Itertools;
use log::{debug, warn};

use super::types::{Flow, MenuCommand};
use super::{FAREWELL_MESSAGE, INVALID_OPTION_MESSAGE, OPTION_PROMPT};
use crate::console::fields::{CategoryField, DecimalField, IntegerField, TextField, YesNoField};
use crate::console::{table, Prompter};

const MENU_WIDTH: usize = 43;

/// The state of one interactive session: the catalog being edited, where it
/// gets saved, and the console it talks to.
pub struct Session<R, W> {
    catalog: ProductCollection,
    output_path: String,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: ProductCollection, output_path: String, prompter: Prompter<R, W>) -> Self {
        Self {
            catalog,
            output_path,
            prompter,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &ProductCollection {
        &self.catalog
    }

    pub fn into_parts(self) -> (ProductCollection, Prompter<R, W>) {
        (self.catalog, self.prompter)
    }

    /// Shows the menu and runs the chosen actions until the user terminates.
    ///
    /// # Errors
    ///
    /// Returns [`catalog_core::error::Error::Interrupted`] when input is
    /// closed at any prompt, or an IO error from the console.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let option = self.prompter.ask(OPTION_PROMPT)?;

            let Some(command) = MenuCommand::from_input(&option) else {
                debug!("Unknown menu option `{}`", option);
                self.prompter.show_msg(INVALID_OPTION_MESSAGE)?;
                self.prompter.pause()?;
                continue;
            };

            if self.dispatch(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Runs a single menu action.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the console cannot be written.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        debug!("Dispatching {:?}", command);
        match command {
            MenuCommand::List => self.list_products()?,
            MenuCommand::SearchById => self.search_by_id()?,
            MenuCommand::SearchByType => self.search_by_type()?,
            MenuCommand::Add => self.add_product()?,
            MenuCommand::Delete => self.delete_product()?,
            MenuCommand::Save => self.save_catalog()?,
            MenuCommand::Terminate => {
                self.prompter.show_msg(FAREWELL_MESSAGE)?;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.blank_line()?;

        let border = "━".repeat(MENU_WIDTH);
        let empty = format!("┃{}┃", " ".repeat(MENU_WIDTH));

        let mut lines = vec![format!("┏{border}┓"), empty.clone()];
        for command in MenuCommand::ALL {
            if command == MenuCommand::Terminate {
                lines.push(empty.clone());
            }
            lines.push(format!("┃   {:<40}┃", command.to_string()));
        }
        lines.push(empty);
        lines.push(format!("┗{border}┛"));

        for line in &lines {
            self.prompter.show_msg(line)?;
        }
        self.prompter.blank_line()
    }

    fn enter_menu(&mut self, title: &str) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.show_msg(&title.to_uppercase())?;
        self.prompter.blank_line()
    }

    fn show_table<'a, I>(&mut self, products: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        for line in table::render(products) {
            self.prompter.show_msg(&line)?;
        }
        Ok(())
    }

    fn finish_action(&mut self) -> Result<()> {
        self.prompter.blank_line()?;
        self.prompter.pause()
    }

    fn list_products(&mut self) -> Result<()> {
        self.enter_menu("Produtos")?;
        let lines = table::render(&self.catalog);
        for line in &lines {
            self.prompter.show_msg(line)?;
        }
        self.finish_action()
    }

    fn search_by_id(&mut self) -> Result<()> {
        self.enter_menu("Pesquisar por id")?;
        let id = self.prompter.accept(
            "Indique o ID do produto a pesquisar: ",
            "ID {value} inválido! Tente novamente.",
            &IntegerField,
        )?;

        match self.catalog.search_by_id(id).cloned() {
            Some(product) => {
                self.prompter.show_msg("Produto encontrado.")?;
                self.prompter.blank_line()?;
                self.show_table([&product])?;
            }
            None => {
                self.prompter
                    .show_msg(&format!("Produto com ID {id} não encontrado."))?;
            }
        }

        self.finish_action()
    }

    fn search_by_type(&mut self) -> Result<()> {
        self.enter_menu("Pesquisa por tipo")?;
        let category = self.prompter.accept(
            "Indique o tipo do produto a pesquisar: ",
            "Tipo {value} inválido! Tente novamente",
            &CategoryField,
        )?;
        self.prompter.blank_line()?;

        let found: Vec<Product> = self
            .catalog
            .search(|product| product.category == category)
            .into_iter()
            .cloned()
            .collect();

        if found.is_empty() {
            self.prompter.show_msg(&format!(
                "Não foram encontrados produtos com tipo {category}."
            ))?;
        } else {
            self.prompter
                .show_msg("Foram encontrados os seguintes produtos:")?;
            self.prompter.blank_line()?;
            self.show_table(&found)?;
        }

        self.finish_action()
    }

    fn add_product(&mut self) -> Result<()> {
        self.enter_menu("Adicionar produto")?;

        let id = self.prompter.accept(
            "Indique o ID do produto: ",
            "ID inválido! Tente novamente.",
            &IntegerField,
        )?;
        let name = self.prompter.accept(
            "Indique o nome do produto: ",
            "Nome não pode estar vazio! Tente novamente.",
            &TextField,
        )?;

        let codes = Category::ALL
            .iter()
            .map(|category| format!("'{}'", category.code()))
            .collect_vec();
        let category = self.prompter.accept(
            &format!("Indique o tipo do produto ({}): ", codes.iter().join(", ")),
            &format!(
                "Tipo inválido! Escolha entre {} ou {}.",
                codes[..codes.len() - 1].iter().join(", "),
                codes[codes.len() - 1]
            ),
            &CategoryField,
        )?;
        let quantity = self.prompter.accept(
            "Indique a quantidade do produto: ",
            "Quantidade inválida! Tente novamente.",
            &IntegerField,
        )?;
        let price = self.prompter.accept(
            "Indique o preço do produto: ",
            "Preço inválido! Tente novamente.",
            &DecimalField,
        )?;

        match Product::new(id, &name, category, quantity, price) {
            Ok(product) => {
                self.catalog.append(product);
                self.prompter
                    .show_msg(&format!("Produto '{name}' adicionado com sucesso!"))?;
            }
            Err(e) => {
                self.prompter
                    .show_msg(&format!("Ocorreu um erro ao adicionar o produto: {e}"))?;
            }
        }

        self.finish_action()
    }

    fn delete_product(&mut self) -> Result<()> {
        self.enter_menu("Eliminar produto")?;
        let lines = table::render(&self.catalog);
        for line in &lines {
            self.prompter.show_msg(line)?;
        }
        self.prompter.blank_line()?;

        let id = self.prompter.accept(
            "Indique o ID do produto a eliminar: ",
            "ID {value} inválido! Tente novamente.",
            &IntegerField,
        )?;

        let Some(product) = self.catalog.search_by_id(id).cloned() else {
            self.prompter
                .show_msg(&format!("Produto com ID {id} não encontrado."))?;
            return self.finish_action();
        };

        self.show_table([&product])?;
        let confirmed = self.prompter.accept(
            "Produto encontrado. Confirma a exclusão do produto? (S/N): ",
            "Resposta inválida! Digite 'S' para Sim ou 'N' para Não.",
            &YesNoField,
        )?;

        if confirmed {
            self.catalog.remove_by_id(id)?;
            self.prompter
                .show_msg(&format!("Produto com ID {id} eliminado com sucesso."))?;
        } else {
            self.prompter
                .show_msg("Operação cancelada. Nenhum produto foi eliminado.")?;
        }

        self.finish_action()
    }

    fn save_catalog(&mut self) -> Result<()> {
        match file_handling::save_catalog(&self.output_path, &self.catalog) {
            Ok(()) => {
                let message = format!("Catálogo guardado em '{}'.", self.output_path);
                self.prompter.show_msg(&message)?;
            }
            Err(e) => {
                warn!("Failed to save catalog: {}", e);
                self.prompter
                    .show_msg(&format!("Erro ao guardar o catálogo: {e}"))?;
            }
        }

        self.finish_action()
    }
}
