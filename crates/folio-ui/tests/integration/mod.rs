mod navigation;
mod rendering;
mod reveal;
mod startup;
