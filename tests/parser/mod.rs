mod tests_classic_text;
mod tests_markup;
