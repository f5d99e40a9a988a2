mod tests_classic;
mod tests_discovery;
mod tests_registry;
mod tests_streamlabs;
mod tests_studio;
mod tests_xsplit;
